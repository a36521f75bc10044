//! Civic Fund Frontend App
//!
//! Dialog layer mounted on top of the server-rendered issue pages.

use leptos::prelude::*;

use crate::components::{CompleteModal, ContributeModal, SuccessModal, TakeModal};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="modal-layer">
            <TakeModal />
            <CompleteModal />
            <ContributeModal />
            <SuccessModal />
        </div>
    }
}
