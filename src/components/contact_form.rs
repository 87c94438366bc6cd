//! Contact Form Component
//!
//! Submitting shows a banner with the draft for a few seconds.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use demo_pages_core::domain::FormField;
use demo_pages_core::InteractivePage;

#[component]
pub fn ContactForm(page: RwSignal<InteractivePage>, banner_for: Duration) -> impl IntoView {
    let millis = u32::try_from(banner_for.as_millis()).unwrap_or(u32::MAX);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        page.update(|p| p.submit());
        tracing::debug!("form submitted, dismissing banner in {}ms", millis);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            // the page may be gone by now; nothing to clear then
            page.try_update(|p| p.dismiss_banner());
        });
    };

    let field_value = move |field: FormField| page.with(|p| p.draft.get(field).to_string());
    let on_field = move |name: &'static str| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            page.update(|p| {
                p.input(name, value);
            });
        }
    };

    view! {
        <div class="card">
            <h2>"Form Test"</h2>
            {move || page.with(|p| p.banner()).map(|text| view! {
                <div class="banner banner-success">{text}</div>
            })}
            <form class="contact-form" on:submit=on_submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        name="name"
                        placeholder="Enter your name"
                        prop:value=move || field_value(FormField::Name)
                        on:input=on_field("name")
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        name="email"
                        placeholder="Enter your email"
                        prop:value=move || field_value(FormField::Email)
                        on:input=on_field("email")
                    />
                </label>
                <label>
                    "Message"
                    <textarea
                        name="message"
                        rows=4
                        placeholder="Enter your message"
                        prop:value=move || field_value(FormField::Message)
                        on:input=on_field("message")
                    ></textarea>
                </label>
                <button type="submit" class="btn btn-blue btn-block">"Submit Form"</button>
            </form>
        </div>
    }
}
