//! Network Test Page
//!
//! Probes the fixed endpoints one by one or all at once, plus any URL the
//! user types in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use demo_pages_core::probe::{Prober, ReqwestFetcher};
use demo_pages_core::routes::Page;

use crate::components::{CustomUrlProbe, EndpointCard, NavLinks, NetworkInfoPanel, RecentLogPanel};
use crate::context::use_app_context;
use crate::store::{NetworkState, StoreLedger};

#[component]
pub fn NetworkPage() -> impl IntoView {
    let app = use_app_context();
    let endpoints = app.config.with_value(|c| c.endpoints.clone());
    let store = Store::new(app.config.with_value(NetworkState::new));
    provide_context(store);
    let log_lines = RwSignal::new(console_logger::recent_lines());

    let run_all = move |_| {
        let endpoints = app.config.with_value(|c| c.endpoints.clone());
        spawn_local(async move {
            let prober = Prober::new(ReqwestFetcher::new());
            let recorded = prober.probe_all(&endpoints, &StoreLedger(store)).await;
            tracing::info!(recorded, total = endpoints.len(), "network tests finished");
            log_lines.try_set(console_logger::recent_lines());
        });
    };

    view! {
        <div class="page page-network">
            <div class="container wide">
                <header class="page-header">
                    <h1>"Network Test Page"</h1>
                    <p>"Testing external API connections and network functionality"</p>
                    <button class="btn btn-green" on:click=run_all>"Run All Network Tests"</button>
                </header>

                <CustomUrlProbe />

                <div class="card-grid">
                    {endpoints.into_iter().map(|endpoint| view! {
                        <EndpointCard endpoint=endpoint />
                    }).collect_view()}
                </div>

                <NetworkInfoPanel />
                <RecentLogPanel lines=log_lines />
                <NavLinks current=Page::Network />
            </div>
        </div>
    }
}
