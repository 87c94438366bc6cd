//! Endpoint Card Component
//!
//! One fixed probe target with its test button and latest result.

use leptos::prelude::*;
use leptos::task::spawn_local;
use demo_pages_core::domain::Endpoint;
use demo_pages_core::probe::{Prober, ReqwestFetcher};

use crate::components::ResultPanel;
use crate::store::{store_is_pending, store_result, use_network_store, StoreLedger};

#[component]
pub fn EndpointCard(endpoint: Endpoint) -> impl IntoView {
    let store = use_network_store();

    let pending_key = endpoint.key();
    let is_pending = Memo::new(move |_| store_is_pending(&store, &pending_key));
    let result_key = endpoint.key();
    let result = Memo::new(move |_| store_result(&store, &result_key));

    let target = endpoint.clone();
    let on_test = move |_| {
        let target = target.clone();
        spawn_local(async move {
            let prober = Prober::new(ReqwestFetcher::new());
            prober.run_endpoint(&target, &StoreLedger(store)).await;
        });
    };

    view! {
        <div class="card endpoint-card">
            <h3>{endpoint.name.clone()}</h3>
            <p class="card-description">{endpoint.description.clone()}</p>
            <button
                class="btn btn-blue btn-block"
                disabled=move || is_pending.get()
                on:click=on_test
            >
                {move || if is_pending.get() { "Loading..." } else { "Test API" }}
            </button>
            {move || result.get().map(|result| view! { <ResultPanel result=result compact=true /> })}
        </div>
    }
}
