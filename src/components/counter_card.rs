//! Counter Card Component

use leptos::prelude::*;
use demo_pages_core::InteractivePage;

#[component]
pub fn CounterCard(page: RwSignal<InteractivePage>) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Counter Test"</h2>
            <div class="counter-row">
                <button class="btn btn-red" on:click=move |_| page.update(|p| p.counter.decrement())>
                    "-"
                </button>
                <span class="counter-value">{move || page.with(|p| p.counter.value)}</span>
                <button class="btn btn-green" on:click=move |_| page.update(|p| p.counter.increment())>
                    "+"
                </button>
            </div>
            <button class="btn btn-gray btn-block" on:click=move |_| page.update(|p| p.counter.reset())>
                "Reset"
            </button>
        </div>
    }
}
