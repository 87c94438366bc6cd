//! Probe Board
//!
//! Per-key status and latest result. Every `begin` takes a fresh sequence
//! number; a result settling under an older number than the latest started
//! for its key is dropped, so overlapping probes cannot overwrite newer data.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::domain::{Endpoint, ProbeKey, ProbeResult, ProbeStatus};

/// Proof that a probe was started for `key`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTicket {
    pub key: ProbeKey,
    pub seq: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Slot {
    status: ProbeStatus,
    latest_seq: u64,
    result: Option<ProbeResult>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbeBoard {
    endpoints: BTreeSet<String>,
    slots: BTreeMap<ProbeKey, Slot>,
}

impl ProbeBoard {
    /// Board accepting the given endpoints plus the custom slot
    pub fn new(endpoints: &[Endpoint]) -> Self {
        Self {
            endpoints: endpoints.iter().map(|e| e.name.clone()).collect(),
            slots: BTreeMap::new(),
        }
    }

    pub fn accepts(&self, key: &ProbeKey) -> bool {
        match key {
            ProbeKey::Endpoint(name) => self.endpoints.contains(name),
            ProbeKey::Custom => true,
        }
    }

    /// Mark `key` pending; `None` if the key is not configured
    pub fn begin(&mut self, key: &ProbeKey) -> Option<ProbeTicket> {
        if !self.accepts(key) {
            debug!(%key, "ignoring probe for unknown key");
            return None;
        }
        let slot = self.slots.entry(key.clone()).or_default();
        slot.latest_seq += 1;
        slot.status = ProbeStatus::Pending;
        Some(ProbeTicket {
            key: key.clone(),
            seq: slot.latest_seq,
        })
    }

    /// Record `result`; returns false when a newer probe superseded the ticket
    pub fn settle(&mut self, ticket: ProbeTicket, result: ProbeResult) -> bool {
        let Some(slot) = self.slots.get_mut(&ticket.key) else {
            return false;
        };
        if ticket.seq != slot.latest_seq {
            debug!(key = %ticket.key, seq = ticket.seq, latest = slot.latest_seq, "discarding stale probe result");
            return false;
        }
        slot.status = if result.success {
            ProbeStatus::Succeeded
        } else {
            ProbeStatus::Failed
        };
        slot.result = Some(result);
        true
    }

    pub fn status(&self, key: &ProbeKey) -> ProbeStatus {
        self.slots.get(key).map(|s| s.status).unwrap_or_default()
    }

    pub fn is_pending(&self, key: &ProbeKey) -> bool {
        self.status(key).is_pending()
    }

    pub fn result(&self, key: &ProbeKey) -> Option<&ProbeResult> {
        self.slots.get(key).and_then(|s| s.result.as_ref())
    }
}

/// Shared access to a board while probes are in flight
///
/// Implementations hold the board behind interior mutability and never keep
/// it borrowed across an await.
pub trait ProbeLedger {
    fn begin(&self, key: &ProbeKey) -> Option<ProbeTicket>;
    fn settle(&self, ticket: ProbeTicket, result: ProbeResult) -> bool;
}

impl ProbeLedger for RefCell<ProbeBoard> {
    fn begin(&self, key: &ProbeKey) -> Option<ProbeTicket> {
        self.borrow_mut().begin(key)
    }

    fn settle(&self, ticket: ProbeTicket, result: ProbeResult) -> bool {
        self.borrow_mut().settle(ticket, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResponseBody;

    fn board() -> ProbeBoard {
        ProbeBoard::new(&[Endpoint::new("Cat Facts API", "http://x", "")])
    }

    fn cat() -> ProbeKey {
        ProbeKey::Endpoint("Cat Facts API".to_string())
    }

    #[test]
    fn test_lifecycle() {
        let mut board = board();
        assert_eq!(board.status(&cat()), ProbeStatus::Idle);

        let ticket = board.begin(&cat()).unwrap();
        assert!(board.is_pending(&cat()));

        assert!(board.settle(ticket, ProbeResult::failed("refused")));
        assert_eq!(board.status(&cat()), ProbeStatus::Failed);
        assert!(!board.is_pending(&cat()));
        assert_eq!(board.result(&cat()).unwrap().error.as_deref(), Some("refused"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut board = board();
        assert!(board.begin(&ProbeKey::Endpoint("Dog API".into())).is_none());
        assert!(board.begin(&ProbeKey::Custom).is_some());
    }

    #[test]
    fn test_stale_result_discarded() {
        let mut board = board();
        let older = board.begin(&cat()).unwrap();
        let newer = board.begin(&cat()).unwrap();

        let fresh = ProbeResult::succeeded(200, ResponseBody::Text("new".into()));
        assert!(board.settle(newer, fresh.clone()));
        assert!(!board.settle(older, ProbeResult::failed("old")));

        assert_eq!(board.result(&cat()), Some(&fresh));
        assert_eq!(board.status(&cat()), ProbeStatus::Succeeded);
    }

    #[test]
    fn test_pending_until_newest_settles() {
        let mut board = board();
        let older = board.begin(&cat()).unwrap();
        let newer = board.begin(&cat()).unwrap();

        assert!(!board.settle(older, ProbeResult::failed("old")));
        assert!(board.is_pending(&cat()));
        assert!(board.result(&cat()).is_none());

        assert!(board.settle(newer, ProbeResult::failed("new")));
        assert!(!board.is_pending(&cat()));
        assert_eq!(board.result(&cat()).and_then(|r| r.error.as_deref()), Some("new"));
    }
}
