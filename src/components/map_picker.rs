//! Map Picker Component
//!
//! Leaflet map plus "locate me" button; the selection lands in `signals`.

use leptos::html;
use leptos::prelude::*;
use leptos_map_picker::{mount_picker, PickerSignals};

use crate::context::use_app_context;

#[component]
pub fn MapPicker(signals: PickerSignals) -> impl IntoView {
    let ctx = use_app_context();
    let map_ref = NodeRef::<html::Div>::new();
    let locate_ref = NodeRef::<html::Button>::new();
    let mounted = StoredValue::new(false);

    // Leaflet needs the container in the DOM, so start it once both refs exist
    Effect::new(move |_| {
        let (Some(map_el), Some(button)) = (map_ref.get(), locate_ref.get()) else { return };
        if mounted.get_value() {
            return;
        }
        mounted.set_value(true);
        let options = ctx.config().map;
        let button: &web_sys::HtmlElement = &button;
        if let Err(e) = mount_picker(&map_el, Some(button), &options, signals) {
            log::error!("map picker failed to start: {:?}", e);
        }
    });

    view! {
        <div class="map-picker">
            <div id="map" class="map-container" node_ref=map_ref></div>
            <div class="map-picker-footer">
                <button type="button" class="locate-btn" node_ref=locate_ref>
                    {move || signals.locate_state.get().label()}
                </button>
                <span class="map-selection">
                    {move || match signals.selected.get() {
                        Some(at) => format!("{:.5}, {:.5}", at.lat, at.lng),
                        None => "Click the map to choose a location".to_string(),
                    }}
                </span>
            </div>
        </div>
    }
}
