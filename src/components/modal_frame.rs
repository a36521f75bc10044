//! Modal Frame Component
//!
//! Shared overlay shell; visibility follows the store's `ModalSet`.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use crate::modals::ModalKind;
use crate::store::{store_is_visible, use_app_store, AppStore};

/// Overlay + dialog box for one `ModalKind`
#[component]
pub fn ModalFrame(kind: ModalKind, children: Children) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div
            id=kind.dom_id()
            class=move || if store_is_visible(&store, kind) { "modal" } else { "modal hidden" }
        >
            <div class="modal-content">{children()}</div>
        </div>
    }
}

/// Focus `input` each time `kind` becomes visible
pub fn focus_when_open(store: AppStore, kind: ModalKind, input: NodeRef<html::Input>) {
    Effect::new(move |_| {
        if !store_is_visible(&store, kind) {
            return;
        }
        if let Some(el) = input.get_untracked() {
            // Wait for the class change to land before focusing
            Timeout::new(0, move || {
                let _ = el.focus();
            })
            .forget();
        }
    });
}
