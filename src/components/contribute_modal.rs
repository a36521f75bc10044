//! Contribute Modal
//!
//! Demo contribution toward an issue's target amount.

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
pub fn ContributeModal() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let input_ref = NodeRef::<html::Input>::new();
    let currency = ctx.currency();

    focus_when_open(store, ModalKind::Contribute, input_ref);

    let confirm = move |_| {
        let Some(session) = store_session(&store, ActionKind::Contribute) else { return; };
        let amount = store_draft(&store, ActionKind::Contribute);
        let currency = ctx.currency();
        let api = ctx.api();
        spawn_local(async move {
            let outcome = flows::contribute(&api, session, &amount, &currency).await;
            store_settle(&store, Some(session), &outcome);
        });
    };

    view! {
        <ModalFrame kind=ModalKind::Contribute>
            <h3>"Contribute (demo)"</h3>
            <p class="modal-hint">"No real money moves; this only updates the collected amount."</p>
            <label class="amount-field">
                <span class="currency">{currency}</span>
                <input
                    id="contributeAmount"
                    type="number"
                    min="1"
                    step="1"
                    placeholder="Amount"
                    node_ref=input_ref
                    prop:value=move || store_draft(&store, ActionKind::Contribute)
                    on:input=move |ev| store_set_draft(&store, ActionKind::Contribute, event_target_value(&ev))
                />
            </label>
            <div class="modal-actions">
                <button class="cancel-btn" on:click=move |_| store_close_modal(&store, ModalKind::Contribute)>
                    "Cancel"
                </button>
                <button class="confirm-btn" on:click=confirm>
                    "Contribute"
                </button>
            </div>
        </ModalFrame>
    }
}
