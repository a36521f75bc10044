//! Take Issue Modal
//!
//! Asks for the worker's name and claims the pending issue.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::modal_frame::{focus_when_open, ModalFrame};
use crate::context::use_app_context;
use crate::flows;
use crate::modals::ModalKind;
use crate::models::ActionKind;
use crate::store::{store_close_modal, store_draft, store_session, store_set_draft, store_settle, use_app_store};

#[component]
pub fn TakeModal() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let input_ref = NodeRef::<html::Input>::new();

    focus_when_open(store, ModalKind::Take, input_ref);

    let confirm = move |_: ()| {
        let Some(session) = store_session(&store, ActionKind::Take) else { return; };
        let worker = store_draft(&store, ActionKind::Take);
        let api = ctx.api();
        spawn_local(async move {
            let outcome = flows::take_issue(&api, session, &worker).await;
            store_settle(&store, Some(session), &outcome);
        });
    };

    view! {
        <ModalFrame kind=ModalKind::Take>
            <h3>"Take this issue"</h3>
            <p class="modal-hint">"Tell the community who is working on it."</p>
            <input
                id="workerName"
                type="text"
                placeholder="Your name"
                node_ref=input_ref
                prop:value=move || store_draft(&store, ActionKind::Take)
                on:input=move |ev| store_set_draft(&store, ActionKind::Take, event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        confirm(());
                    }
                }
            />
            <div class="modal-actions">
                <button class="cancel-btn" on:click=move |_| store_close_modal(&store, ModalKind::Take)>
                    "Cancel"
                </button>
                <button class="confirm-btn" on:click=move |_| confirm(())>
                    "Take issue"
                </button>
            </div>
        </ModalFrame>
    }
}
