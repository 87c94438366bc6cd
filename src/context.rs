//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use tracing::warn;

use demo_pages_core::{PagesConfig, PagesResult, Workbench};

use crate::browser::BrowserStorage;

/// App-wide configuration, provided once by `App`
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<PagesConfig>,
}

impl AppContext {
    pub fn new(config: PagesConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Todo/settings page state, provided by `AdvancedPage`
#[derive(Clone, Copy)]
pub struct WorkbenchContext {
    pub bench: RwSignal<Workbench<BrowserStorage>>,
}

impl WorkbenchContext {
    pub fn new(config: &PagesConfig) -> Self {
        Self {
            bench: RwSignal::new(Workbench::load(BrowserStorage, config)),
        }
    }

    /// Run a workbench transition, logging a failed write instead of surfacing it
    pub fn apply<T>(
        &self,
        action: &str,
        f: impl FnOnce(&mut Workbench<BrowserStorage>) -> PagesResult<T>,
    ) -> Option<T> {
        let mut outcome = None;
        self.bench.update(|bench| match f(bench) {
            Ok(value) => outcome = Some(value),
            Err(e) => warn!(action, "could not persist: {}", e),
        });
        outcome
    }
}

pub fn use_workbench() -> WorkbenchContext {
    use_context::<WorkbenchContext>().expect("WorkbenchContext should be provided")
}
