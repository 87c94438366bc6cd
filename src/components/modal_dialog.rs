//! Modal Dialog Component
//!
//! Closed only by its button; clicks on the overlay are ignored.

use leptos::prelude::*;

use crate::context::use_workbench;

#[component]
pub fn ModalDialog() -> impl IntoView {
    let ctx = use_workbench();

    view! {
        <Show when=move || ctx.bench.with(|b| b.modal_open())>
            <div class="modal-overlay">
                <div class="modal">
                    <h3>"Modal Test"</h3>
                    <p>
                        "This is a test modal. It demonstrates overlay functionality and can be closed with the button below."
                    </p>
                    <div class="modal-actions">
                        <button class="btn btn-gray" on:click=move |_| ctx.bench.update(|b| b.close_modal())>
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
