//! Network Probe
//!
//! Fixed and user-supplied GET probes with per-key pending/result tracking.

mod fetcher;
mod board;
mod runner;

pub use fetcher::{FetchedResponse, Fetcher, ReqwestFetcher};
pub use board::{ProbeBoard, ProbeLedger, ProbeTicket};
pub use runner::Prober;
