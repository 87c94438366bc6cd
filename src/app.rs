//! Demo Pages App
//!
//! Picks the page for the current path. Navigation is by plain links,
//! each page load starts from fresh state.

use leptos::prelude::*;
use demo_pages_core::routes::Page;
use demo_pages_core::PagesConfig;

use crate::browser::current_page;
use crate::context::AppContext;
use crate::pages::{AdvancedPage, HomePage, InteractivePageView, NetworkPage};

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new(PagesConfig::default()));

    let page = current_page();
    tracing::info!(path = page.path(), "rendering page");

    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Interactive => view! { <InteractivePageView /> }.into_any(),
        Page::Advanced => view! { <AdvancedPage /> }.into_any(),
        Page::Network => view! { <NetworkPage /> }.into_any(),
    }
}
