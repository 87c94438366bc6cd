//! Tab Bar Component

use leptos::prelude::*;
use demo_pages_core::domain::Tab;

use crate::context::use_workbench;

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_workbench();

    view! {
        <div class="tab-bar">
            {Tab::ALL.into_iter().map(|tab| {
                let is_active = move || ctx.bench.with(|b| b.active_tab() == tab);
                view! {
                    <button
                        id=tab.id()
                        class=move || if is_active() { "tab active" } else { "tab" }
                        on:click=move |_| ctx.bench.update(|b| b.select_tab(tab))
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
