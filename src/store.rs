//! Network Page State Store
//!
//! Uses Leptos reactive_stores so probe cards only re-render for their own slot.

use leptos::prelude::*;
use reactive_stores::Store;

use demo_pages_core::domain::{ProbeKey, ProbeResult};
use demo_pages_core::probe::{ProbeBoard, ProbeLedger, ProbeTicket};
use demo_pages_core::PagesConfig;

/// State behind the network test page
#[derive(Clone, Debug, Default, Store)]
pub struct NetworkState {
    /// Status and last result per endpoint and the custom slot
    pub board: ProbeBoard,
    /// Text of the custom URL input
    pub custom_url: String,
}

impl NetworkState {
    pub fn new(config: &PagesConfig) -> Self {
        Self {
            board: ProbeBoard::new(&config.endpoints),
            custom_url: String::new(),
        }
    }
}

/// Type alias for the store
pub type NetworkStore = Store<NetworkState>;

/// Get the network store from context
pub fn use_network_store() -> NetworkStore {
    expect_context::<NetworkStore>()
}

/// Ledger writing probe outcomes into the store as they settle
#[derive(Clone, Copy)]
pub struct StoreLedger(pub NetworkStore);

impl ProbeLedger for StoreLedger {
    fn begin(&self, key: &ProbeKey) -> Option<ProbeTicket> {
        self.0.board().write().begin(key)
    }

    fn settle(&self, ticket: ProbeTicket, result: ProbeResult) -> bool {
        self.0.board().write().settle(ticket, result)
    }
}

// ========================
// Store Helper Functions
// ========================

/// Last settled result for `key`
pub fn store_result(store: &NetworkStore, key: &ProbeKey) -> Option<ProbeResult> {
    store.board().read().result(key).cloned()
}

/// Whether a probe for `key` is in flight
pub fn store_is_pending(store: &NetworkStore, key: &ProbeKey) -> bool {
    store.board().read().is_pending(key)
}
