//! Page Configuration
//!
//! Defaults, overridable per page through `data-*` attributes on `<body>`.

use leptos_map_picker::{Coordinate, PickerOptions};
use log::LevelFilter;

/// Element the creation form mounts into, when the page has one
pub const FORM_ROOT_ID: &str = "issue-form-root";

/// Attribute on the form root that turns the map picker on
pub const MAP_PICKER_ATTR: &str = "data-map-picker";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub currency: String,
    pub log_level: LevelFilter,
    pub map: PickerOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            currency: "₹".to_string(),
            log_level: LevelFilter::Info,
            map: PickerOptions::default(),
        }
    }
}

impl AppConfig {
    /// Build from a `data-*` lookup; `lookup("api-base")` reads `data-api-base`.
    ///
    /// Returns the config plus a note for every value that was ignored.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut ignored = Vec::new();

        if let Some(base) = lookup("api-base").filter(|v| !v.trim().is_empty()) {
            config.api_base = base.trim().to_string();
        }
        if let Some(currency) = lookup("currency") {
            config.currency = currency;
        }
        if let Some(raw) = lookup("log-level") {
            match raw.trim().parse::<LevelFilter>() {
                Ok(level) => config.log_level = level,
                Err(_) => ignored.push(format!("log-level={:?}", raw)),
            }
        }
        if let Some(raw) = lookup("map-center") {
            match Coordinate::parse(&raw) {
                Some(center) => config.map.center = center,
                None => ignored.push(format!("map-center={:?}", raw)),
            }
        }
        if let Some(raw) = lookup("map-zoom") {
            match raw.trim().parse::<f64>() {
                Ok(zoom) if (0.0..=config.map.max_zoom).contains(&zoom) => config.map.zoom = zoom,
                _ => ignored.push(format!("map-zoom={:?}", raw)),
            }
        }

        (config, ignored)
    }

    /// Read overrides from the document body
    pub fn from_document() -> (Self, Vec<String>) {
        let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
        Self::from_lookup(|key| body.as_ref().and_then(|b| b.get_attribute(&format!("data-{}", key))))
    }
}
