//! Navigation Links Component
//!
//! Static anchors to every page except the current one.

use leptos::prelude::*;
use demo_pages_core::routes::Page;

fn link_class(page: Page) -> &'static str {
    match page {
        Page::Home => "btn btn-gray",
        Page::Interactive => "btn btn-blue",
        Page::Advanced => "btn btn-purple",
        Page::Network => "btn btn-orange",
    }
}

#[component]
pub fn NavLinks(current: Page) -> impl IntoView {
    view! {
        <nav class="page-nav">
            {current.nav_targets().into_iter().map(|page| view! {
                <a href=page.path() class=link_class(page)>{page.label()}</a>
            }).collect_view()}
        </nav>
    }
}
