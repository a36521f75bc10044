//! Leaflet Bindings
//!
//! Minimal `wasm_bindgen` bindings to the global `L` namespace, covering only
//! what the picker touches: map, tile layer, marker and click events.

use wasm_bindgen::prelude::*;

use crate::{Coordinate, MapSurface, PickerOptions};

#[wasm_bindgen]
extern "C" {
    #[derive(Clone, Debug)]
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn create_map(container: &web_sys::HtmlElement) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method)]
    pub fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function) -> LeafletMap;

    #[derive(Clone, Debug)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    #[derive(Clone, Debug)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(lat_lng: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to_map(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    pub fn set_lat_lng(this: &Marker, lat_lng: &JsValue) -> Marker;

    #[derive(Clone, Debug)]
    pub type LeafletMouseEvent;

    #[wasm_bindgen(method, getter)]
    pub fn latlng(this: &LeafletMouseEvent) -> LatLng;

    #[derive(Clone, Debug)]
    pub type LatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LatLng) -> f64;
}

/// Leaflet accepts `[lat, lng]` arrays anywhere it takes a LatLng
fn lat_lng(at: Coordinate) -> JsValue {
    js_sys::Array::of2(&JsValue::from_f64(at.lat), &JsValue::from_f64(at.lng)).into()
}

impl From<LatLng> for Coordinate {
    fn from(value: LatLng) -> Self {
        Coordinate::new(value.lat(), value.lng())
    }
}

/// A live Leaflet map used as the picker's drawing surface
pub struct LeafletSurface {
    map: LeafletMap,
}

impl LeafletSurface {
    /// Create the map inside `container`, center it and attach the tile layer
    pub fn create(container: &web_sys::HtmlElement, options: &PickerOptions) -> Result<Self, JsValue> {
        let map = create_map(container);
        map.set_view(&lat_lng(options.center), options.zoom);

        let tile_options = js_sys::Object::new();
        js_sys::Reflect::set(&tile_options, &"attribution".into(), &options.attribution.as_str().into())?;
        js_sys::Reflect::set(&tile_options, &"maxZoom".into(), &JsValue::from_f64(options.max_zoom))?;
        tile_layer(&options.tile_url, &tile_options).add_to(&map);

        Ok(Self { map })
    }

    pub fn map(&self) -> &LeafletMap {
        &self.map
    }
}

impl MapSurface for LeafletSurface {
    type Marker = Marker;

    fn add_marker(&self, at: Coordinate) -> Marker {
        marker(&lat_lng(at)).add_to_map(&self.map)
    }

    fn move_marker(&self, marker: &Marker, to: Coordinate) {
        marker.set_lat_lng(&lat_lng(to));
    }

    fn center_on(&self, at: Coordinate, zoom: f64) {
        self.map.set_view(&lat_lng(at), zoom);
    }
}
