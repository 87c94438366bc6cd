//! Network Information Component

use leptos::prelude::*;
use demo_pages_core::environment::NetworkInfo;

use crate::browser::BrowserEnvironment;

#[component]
pub fn NetworkInfoPanel() -> impl IntoView {
    let info = NetworkInfo::gather(&BrowserEnvironment);
    let rows = [
        ("User Agent:", info.user_agent),
        ("Online Status:", info.online),
        ("Connection:", info.connection),
        ("Language:", info.language),
    ];

    view! {
        <div class="card">
            <h2>"Network Information"</h2>
            <div class="info-grid">
                {rows.into_iter().map(|(label, value)| view! {
                    <div class="info-row">
                        <strong>{label}</strong>
                        <div class="info-value">{value}</div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
