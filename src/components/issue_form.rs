//! Issue Form Component
//!
//! Raise a new issue: title, description, target amount and, on pages that
//! ask for it, a location picked on the map.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_map_picker::create_picker_signals;

use crate::components::map_picker::MapPicker;
use crate::context::use_app_context;
use crate::flows;
use crate::host::ViewHost;
use crate::store::{store_settle, use_app_store};
use crate::validation::IssueDraft;

#[component]
pub fn IssueForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let picker = ctx.map_enabled.then(create_picker_signals);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = IssueDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            amount: amount.get_untracked(),
        };
        let location = picker.and_then(|p| p.selected.get_untracked());
        let api = ctx.api();
        let host = ctx.host();

        spawn_local(async move {
            let outcome = flows::create_issue(&api, &draft, picker.is_some(), location).await;
            if let Some(message) = flows::creation_alert(&outcome) {
                host.alert(message);
            }
            // Inputs are left as they are so a failed submit can be retried
            store_settle(&store, None, &outcome);
        });
    };

    view! {
        <form id="issueForm" class="issue-form" on:submit=submit>
            <label for="title">"Title"</label>
            <input
                id="title"
                type="text"
                required
                placeholder="What needs fixing?"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />

            <label for="description">"Description"</label>
            <textarea
                id="description"
                rows="4"
                placeholder="Where is it, and why does it matter?"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>

            <label for="amount">"Target amount"</label>
            <input
                id="amount"
                type="number"
                min="1"
                step="1"
                required
                prop:value=move || amount.get()
                on:input=move |ev| set_amount.set(event_target_value(&ev))
            />

            {picker.map(|signals| view! {
                <label>"Location"</label>
                <MapPicker signals=signals />
            })}

            <button type="submit" class="submit-btn">"Raise issue"</button>
        </form>
    }
}
