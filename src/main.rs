#![allow(warnings)]
//! Civic Fund Frontend Entry Point

mod api;
mod app;
mod bindings;
mod components;
mod config;
mod context;
mod flows;
mod host;
mod modals;
mod models;
mod session;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::components::IssueForm;
use crate::config::{AppConfig, FORM_ROOT_ID, MAP_PICKER_ATTR};
use crate::context::AppContext;
use crate::store::{AppState, AppStore};

fn main() {
    console_error_panic_hook::set_once();

    let (config, ignored) = AppConfig::from_document();
    if let Err(e) = rolling_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", e).into());
    }
    for setting in ignored {
        log::warn!("ignoring page setting {}", setting);
    }

    let form_root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(FORM_ROOT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    let map_enabled = form_root.as_ref().is_some_and(|el| el.has_attribute(MAP_PICKER_ATTR));

    let ctx = AppContext::new(config, map_enabled);
    let store: AppStore = Store::new(AppState::default());

    bindings::bind_escape(store);
    bindings::bind_action_triggers(store);

    if let Some(root) = form_root {
        log::info!("mounting issue form (map picker: {})", map_enabled);
        leptos::mount::mount_to(root, move || {
            provide_context(ctx);
            provide_context(store);
            view! { <IssueForm /> }
        })
        .forget();
    }

    mount_to_body(move || {
        provide_context(ctx);
        provide_context(store);
        view! { <App /> }
    });
}
