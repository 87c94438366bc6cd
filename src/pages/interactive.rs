//! Test Page 1 - Interactive Components

use leptos::prelude::*;
use demo_pages_core::routes::Page;
use demo_pages_core::InteractivePage;

use crate::components::{ContactForm, CounterCard, NavLinks};
use crate::context::use_app_context;

#[component]
pub fn InteractivePageView() -> impl IntoView {
    let app = use_app_context();
    let page = RwSignal::new(InteractivePage::new());
    let banner_for = app.config.with_value(|c| c.submit_banner);

    view! {
        <div class="page page-interactive">
            <div class="container">
                <header class="page-header">
                    <h1>"Test Page 1 - Interactive Components"</h1>
                    <p>"Testing forms, state management, and user interactions"</p>
                </header>
                <CounterCard page=page />
                <ContactForm page=page banner_for=banner_for />
                <NavLinks current=Page::Interactive />
            </div>
        </div>
    }
}
