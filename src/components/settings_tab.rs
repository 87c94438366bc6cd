//! Settings Tab Component

use leptos::prelude::*;

use crate::context::use_workbench;

#[component]
pub fn SettingsTab() -> impl IntoView {
    let ctx = use_workbench();
    let is_dark = move || ctx.bench.with(|b| b.theme().is_dark());

    view! {
        <div>
            <h3>"Settings"</h3>
            <div class="settings">
                <div class="setting-row">
                    <span>"Dark Mode"</span>
                    <button
                        class=move || if is_dark() { "switch on" } else { "switch" }
                        on:click=move |_| {
                            ctx.apply("toggle theme", |b| b.toggle_theme());
                        }
                    >
                        <span class="switch-knob"></span>
                    </button>
                </div>

                <button class="btn btn-purple" on:click=move |_| ctx.bench.update(|b| b.open_modal())>
                    "Open Modal Test"
                </button>

                <button
                    class="btn btn-red"
                    on:click=move |_| {
                        ctx.apply("clear all data", |b| b.clear_all_data());
                    }
                >
                    "Clear All Data"
                </button>
            </div>
        </div>
    }
}
