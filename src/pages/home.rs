use leptos::prelude::*;
use demo_pages_core::routes::Page;

use crate::components::NavLinks;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page-home">
            <div class="container">
                <header class="page-header">
                    <h1>"Demo Pages"</h1>
                    <p>"Forms and counters, tabs with local storage, and live network probes."</p>
                </header>
                <NavLinks current=Page::Home />
            </div>
        </div>
    }
}
