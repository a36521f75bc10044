//! Complete Issue Modal

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::modal_frame::ModalFrame;
use crate::context::use_app_context;
use crate::flows;
use crate::modals::ModalKind;
use crate::models::ActionKind;
use crate::store::{store_close_modal, store_session, store_settle, use_app_store};

#[component]
pub fn CompleteModal() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let confirm = move |_| {
        let Some(session) = store_session(&store, ActionKind::Complete) else { return; };
        let api = ctx.api();
        spawn_local(async move {
            let outcome = flows::complete_issue(&api, session).await;
            store_settle(&store, Some(session), &outcome);
        });
    };

    view! {
        <ModalFrame kind=ModalKind::Complete>
            <h3>"Mark as completed?"</h3>
            <p class="modal-hint">"Only confirm once the work is actually done."</p>
            <div class="modal-actions">
                <button class="cancel-btn" on:click=move |_| store_close_modal(&store, ModalKind::Complete)>
                    "Cancel"
                </button>
                <button class="confirm-btn" on:click=confirm>
                    "Complete"
                </button>
            </div>
        </ModalFrame>
    }
}
