//! Probe Result Panel Component
//!
//! Success/error box with time, status line and body. JSON bodies are
//! highlighted, everything else is shown as text.

use leptos::prelude::*;
use demo_pages_core::domain::ProbeResult;

use crate::markdown::highlight_json;

#[component]
pub fn ResultPanel(
    result: ProbeResult,
    /// Card layout: icon-only badge, smaller body
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let panel_class = match (result.success, compact) {
        (true, false) => "result-panel success",
        (false, false) => "result-panel error",
        (true, true) => "result-panel success compact",
        (false, true) => "result-panel error compact",
    };
    let badge = match (result.success, compact) {
        (true, true) => "✅",
        (false, true) => "❌",
        (true, false) => "✅ Success",
        (false, false) => "❌ Error",
    };
    let status = if result.success { result.status } else { None };
    let highlighted = result
        .data
        .as_ref()
        .filter(|body| result.success && body.is_json())
        .and_then(|body| highlight_json(&body.display()));
    let text = result.display();

    view! {
        <div class=panel_class>
            <div class="result-header">
                <span class="result-badge">{badge}</span>
                <span class="result-time">{result.local_time()}</span>
            </div>
            {status.map(|code| view! { <div class="result-status">"Status: " {code}</div> })}
            {match highlighted {
                Some(html) => view! { <div class="result-body" inner_html=html></div> }.into_any(),
                None => view! { <pre class="result-body">{text}</pre> }.into_any(),
            }}
        </div>
    }
}
