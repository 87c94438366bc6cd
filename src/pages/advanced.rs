//! Test Page 2 - Advanced Components
//!
//! Tabs, modal, local storage and theme switching.

use leptos::prelude::*;
use demo_pages_core::domain::Tab;
use demo_pages_core::routes::Page;

use crate::browser::apply_theme;
use crate::components::{AboutTab, ModalDialog, NavLinks, SettingsTab, TabBar, TodoTab};
use crate::context::{use_app_context, WorkbenchContext};

#[component]
pub fn AdvancedPage() -> impl IntoView {
    let app = use_app_context();
    let ctx = app.config.with_value(WorkbenchContext::new);
    provide_context(ctx);

    let theme = Memo::new(move |_| ctx.bench.with(|b| b.theme()));
    Effect::new(move |_| apply_theme(theme.get()));

    let active_tab = Memo::new(move |_| ctx.bench.with(|b| b.active_tab()));

    view! {
        <div class=move || if theme.get().is_dark() { "page page-advanced dark" } else { "page page-advanced" }>
            <div class="container">
                <header class="page-header">
                    <h1>"Test Page 2 - Advanced Components"</h1>
                    <p>"Testing tabs, modals, local storage, and theme switching"</p>
                    <button
                        class="btn btn-blue"
                        on:click=move |_| {
                            ctx.apply("toggle theme", |b| b.toggle_theme());
                        }
                    >
                        {move || theme.get().switch_label()}
                    </button>
                </header>

                <div class="card tabs">
                    <TabBar />
                    <div class="tab-body">
                        {move || match active_tab.get() {
                            Tab::TodoList => view! { <TodoTab /> }.into_any(),
                            Tab::Settings => view! { <SettingsTab /> }.into_any(),
                            Tab::About => view! { <AboutTab /> }.into_any(),
                        }}
                    </div>
                </div>

                <NavLinks current=Page::Advanced />
            </div>
            <ModalDialog />
        </div>
    }
}
