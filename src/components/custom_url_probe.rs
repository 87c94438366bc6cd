//! Custom URL Probe Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use demo_pages_core::domain::ProbeKey;
use demo_pages_core::probe::{Prober, ReqwestFetcher};

use crate::components::ResultPanel;
use crate::store::{
    store_is_pending, store_result, use_network_store, NetworkStateStoreFields, StoreLedger,
};

#[component]
pub fn CustomUrlProbe() -> impl IntoView {
    let store = use_network_store();
    let is_pending = Memo::new(move |_| store_is_pending(&store, &ProbeKey::Custom));
    let result = Memo::new(move |_| store_result(&store, &ProbeKey::Custom));
    let is_blank = move || store.custom_url().read().trim().is_empty();

    let on_test = move |_| {
        let url = store.custom_url().get();
        spawn_local(async move {
            let prober = Prober::new(ReqwestFetcher::new());
            prober.run_custom(&url, &StoreLedger(store)).await;
        });
    };

    view! {
        <div class="card">
            <h2>"Custom URL Test"</h2>
            <div class="input-row">
                <input
                    type="url"
                    placeholder="Enter any API URL to test..."
                    prop:value=move || store.custom_url().get()
                    on:input=move |ev| *store.custom_url().write() = event_target_value(&ev)
                />
                <button
                    class="btn btn-blue"
                    disabled=move || is_blank() || is_pending.get()
                    on:click=on_test
                >
                    {move || if is_pending.get() { "Testing..." } else { "Test URL" }}
                </button>
            </div>
            {move || result.get().map(|result| view! { <ResultPanel result=result /> })}
        </div>
    }
}
