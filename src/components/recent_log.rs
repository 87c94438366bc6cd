//! Recent Log Component
//!
//! Tail of the lines kept by the logger, newest last.

use leptos::prelude::*;

#[component]
pub fn RecentLogPanel(lines: RwSignal<Vec<String>>) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header">
                <h2>"Recent Log"</h2>
                <button
                    class="btn btn-gray"
                    on:click=move |_| lines.set(console_logger::recent_lines())
                >
                    "Refresh"
                </button>
            </div>
            <Show
                when=move || lines.with(|l| !l.is_empty())
                fallback=|| view! { <p class="empty-hint">"No log lines yet."</p> }
            >
                <pre class="log-tail">{move || lines.with(|l| l.join("\n"))}</pre>
            </Show>
        </div>
    }
}
