//! Probe Runner
//!
//! Issues probes through a [`Fetcher`] and files outcomes on a ledger.
//! Failures never escape: every error becomes a `success=false` result.

use futures::future::join_all;
use tracing::{debug, warn};

use super::board::ProbeLedger;
use super::fetcher::Fetcher;
use crate::domain::{Endpoint, ProbeKey, ProbeResult, ResponseBody};
use crate::error::PagesResult;

#[derive(Debug, Clone)]
pub struct Prober<F> {
    fetcher: F,
}

impl<F: Fetcher> Prober<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Probe a fixed endpoint, the body must be JSON
    pub async fn probe_endpoint(&self, name: &str, url: &str) -> ProbeResult {
        debug!(endpoint = name, url, "probe started");
        let outcome: PagesResult<ProbeResult> = async {
            let response = self.fetcher.fetch(url).await?;
            let data = response.json()?;
            Ok(ProbeResult::succeeded(response.status, ResponseBody::Json(data)))
        }
        .await;
        settle_outcome(name, outcome)
    }

    /// Probe a user-supplied URL; `None` when the URL is blank
    ///
    /// JSON is decoded only when the content type says so, anything else is
    /// kept as text. All response headers are captured.
    pub async fn probe_custom_url(&self, url: &str) -> Option<ProbeResult> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }
        debug!(url, "custom probe started");
        let outcome: PagesResult<ProbeResult> = async {
            let response = self.fetcher.fetch(url).await?;
            let data = if response.is_json() {
                ResponseBody::Json(response.json()?)
            } else {
                ResponseBody::Text(response.body.clone())
            };
            Ok(ProbeResult::succeeded(response.status, data).with_headers(response.headers))
        }
        .await;
        Some(settle_outcome("custom", outcome))
    }

    /// Probe one endpoint and record it on `ledger`
    pub async fn run_endpoint<L: ProbeLedger>(&self, endpoint: &Endpoint, ledger: &L) -> bool {
        let Some(ticket) = ledger.begin(&endpoint.key()) else {
            return false;
        };
        let result = self.probe_endpoint(&endpoint.name, &endpoint.url).await;
        ledger.settle(ticket, result)
    }

    /// Probe the custom URL and record it under [`ProbeKey::Custom`]
    pub async fn run_custom<L: ProbeLedger>(&self, url: &str, ledger: &L) -> bool {
        if url.trim().is_empty() {
            return false;
        }
        let Some(ticket) = ledger.begin(&ProbeKey::Custom) else {
            return false;
        };
        match self.probe_custom_url(url).await {
            Some(result) => ledger.settle(ticket, result),
            None => false,
        }
    }

    /// Fan out one probe per endpoint and wait for all of them to settle
    ///
    /// Every request starts before any is awaited. Results land on the
    /// ledger as each one settles; one failure does not affect the others.
    /// Returns how many results were recorded.
    pub async fn probe_all<L: ProbeLedger>(&self, endpoints: &[Endpoint], ledger: &L) -> usize {
        let probes: Vec<_> = endpoints
            .iter()
            .filter_map(|endpoint| {
                let ticket = ledger.begin(&endpoint.key())?;
                Some(async move {
                    let result = self.probe_endpoint(&endpoint.name, &endpoint.url).await;
                    ledger.settle(ticket, result)
                })
            })
            .collect();
        debug!(count = probes.len(), "probing all endpoints");

        join_all(probes).await.into_iter().filter(|recorded| *recorded).count()
    }
}

fn settle_outcome(name: &str, outcome: PagesResult<ProbeResult>) -> ProbeResult {
    match outcome {
        Ok(result) => {
            debug!(endpoint = name, status = result.status, "probe succeeded");
            result
        }
        Err(e) => {
            warn!(endpoint = name, "probe failed: {}", e);
            ProbeResult::failed(e.to_string())
        }
    }
}
