//! Success Overlay
//!
//! Closing it through its button reloads the page so server-rendered lists
//! pick up the change. Escape only hides it.

use leptos::prelude::*;

use crate::components::modal_frame::ModalFrame;
use crate::context::use_app_context;
use crate::modals::ModalKind;
use crate::store::{store_dismiss_success, store_success, use_app_store};

#[component]
pub fn SuccessModal() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    view! {
        <ModalFrame kind=ModalKind::Success>
            <h3 id="successTitle">{move || store_success(&store).map(|m| m.title).unwrap_or_default()}</h3>
            <p id="successMessage">{move || store_success(&store).map(|m| m.message).unwrap_or_default()}</p>
            <div class="modal-actions">
                <button class="confirm-btn" on:click=move |_| store_dismiss_success(&store, &ctx.host())>
                    "OK"
                </button>
            </div>
        </ModalFrame>
    }
}
