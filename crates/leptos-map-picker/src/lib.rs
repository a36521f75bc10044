//! Leptos Map Picker
//!
//! Single-point location picker on top of Leaflet.
//! Tracks one selected coordinate and one marker; offers a "locate me"
//! control backed by the browser geolocation API.

mod geolocation;
pub mod leaflet;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

pub use geolocation::current_position;
pub use leaflet::LeafletSurface;

/// Alert shown when the browser cannot provide a position
pub const LOCATE_FAILED_MESSAGE: &str = "Unable to fetch your location. Please pick it on the map.";

/// WGS84 position in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Parse `"lat,lng"`
    pub fn parse(raw: &str) -> Option<Self> {
        let (lat, lng) = raw.split_once(',')?;
        let lat: f64 = lat.trim().parse().ok()?;
        let lng: f64 = lng.trim().parse().ok()?;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return None;
        }
        Some(Self { lat, lng })
    }
}

/// Map view and tile settings
#[derive(Clone, Debug, PartialEq)]
pub struct PickerOptions {
    /// Initial, region-level center
    pub center: Coordinate,
    pub zoom: f64,
    /// Zoom used when recentering on a fresh selection
    pub focus_zoom: f64,
    pub max_zoom: f64,
    pub tile_url: String,
    pub attribution: String,
    pub high_accuracy: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            center: Coordinate::new(20.5937, 78.9629),
            zoom: 5.0,
            focus_zoom: 15.0,
            max_zoom: 19.0,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; OpenStreetMap contributors".to_string(),
            high_accuracy: true,
        }
    }
}

// ========================
// Surface + selection
// ========================

/// Whatever draws the map: Leaflet in the browser, a recorder in tests
pub trait MapSurface {
    type Marker;

    fn add_marker(&self, at: Coordinate) -> Self::Marker;
    fn move_marker(&self, marker: &Self::Marker, to: Coordinate);
    fn center_on(&self, at: Coordinate, zoom: f64);
}

/// Holds the selected point and the one marker that shows it
pub struct LocationPicker<S: MapSurface> {
    surface: S,
    selected: Option<Coordinate>,
    marker: Option<S::Marker>,
    focus_zoom: f64,
}

impl<S: MapSurface> LocationPicker<S> {
    pub fn new(surface: S, focus_zoom: f64) -> Self {
        Self {
            surface,
            selected: None,
            marker: None,
            focus_zoom,
        }
    }

    /// Select `at`: place the marker (or move the existing one) and recenter
    pub fn select(&mut self, at: Coordinate) {
        match &self.marker {
            Some(marker) => self.surface.move_marker(marker, at),
            None => self.marker = Some(self.surface.add_marker(at)),
        }
        self.selected = Some(at);
        self.surface.center_on(at, self.focus_zoom);
    }

    pub fn selected(&self) -> Option<Coordinate> {
        self.selected
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

// ========================
// Locate control
// ========================

/// Label state of the "locate me" button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LocateState {
    #[default]
    Prompt,
    Locating,
    Selected,
}

impl LocateState {
    pub fn label(self) -> &'static str {
        match self {
            LocateState::Prompt => "📍 Use my current location",
            LocateState::Locating => "Locating…",
            LocateState::Selected => "📍 Location selected",
        }
    }
}

/// Identifies one locate request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocateTicket(u64);

/// What to do with a geolocation answer
#[derive(Clone, Debug, PartialEq)]
pub enum LocateResolution {
    Apply(Coordinate),
    Failed(String),
    /// A newer request or a map click superseded this one
    Stale,
}

/// Tracks outstanding locate requests so only the latest one may land
#[derive(Debug, Default)]
pub struct LocateControl {
    state: LocateState,
    generation: u64,
}

impl LocateControl {
    pub fn state(&self) -> LocateState {
        self.state
    }

    pub fn begin(&mut self) -> LocateTicket {
        self.generation += 1;
        self.state = LocateState::Locating;
        LocateTicket(self.generation)
    }

    /// A manual selection wins over any request still in flight
    pub fn supersede(&mut self) {
        self.generation += 1;
        if self.state == LocateState::Locating {
            self.state = LocateState::Prompt;
        }
    }

    pub fn resolve(&mut self, ticket: LocateTicket, result: Result<Coordinate, String>) -> LocateResolution {
        if ticket.0 != self.generation {
            return LocateResolution::Stale;
        }
        match result {
            Ok(at) => {
                self.state = LocateState::Selected;
                LocateResolution::Apply(at)
            }
            Err(reason) => {
                self.state = LocateState::Prompt;
                LocateResolution::Failed(reason)
            }
        }
    }
}

// ========================
// Leptos wiring
// ========================

/// Reactive outputs of a mounted picker
#[derive(Clone, Copy)]
pub struct PickerSignals {
    pub selected: RwSignal<Option<Coordinate>>,
    pub locate_state: RwSignal<LocateState>,
}

pub fn create_picker_signals() -> PickerSignals {
    PickerSignals {
        selected: RwSignal::new(None),
        locate_state: RwSignal::new(LocateState::Prompt),
    }
}

type SharedPicker = Rc<RefCell<LocationPicker<LeafletSurface>>>;
type SharedControl = Rc<RefCell<LocateControl>>;

/// Create the Leaflet map in `container` and bind map clicks and the
/// optional locate button. Listeners live for the rest of the page.
pub fn mount_picker(
    container: &web_sys::HtmlElement,
    locate_button: Option<&web_sys::HtmlElement>,
    options: &PickerOptions,
    signals: PickerSignals,
) -> Result<(), JsValue> {
    let surface = LeafletSurface::create(container, options)?;
    let map = surface.map().clone();
    let picker: SharedPicker = Rc::new(RefCell::new(LocationPicker::new(surface, options.focus_zoom)));
    let control: SharedControl = Rc::new(RefCell::new(LocateControl::default()));

    {
        let picker = picker.clone();
        let control = control.clone();
        let on_click = Closure::<dyn FnMut(leaflet::LeafletMouseEvent)>::new(move |ev: leaflet::LeafletMouseEvent| {
            let at = Coordinate::from(ev.latlng());
            control.borrow_mut().supersede();
            picker.borrow_mut().select(at);
            signals.selected.set(Some(at));
            signals.locate_state.set(control.borrow().state());
            log::debug!("map click at {:.5},{:.5}", at.lat, at.lng);
        });
        map.on("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    if let Some(button) = locate_button {
        let high_accuracy = options.high_accuracy;
        let on_locate = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            request_location(picker.clone(), control.clone(), signals, high_accuracy);
        });
        button.add_event_listener_with_callback("click", on_locate.as_ref().unchecked_ref())?;
        on_locate.forget();
    }

    Ok(())
}

fn request_location(picker: SharedPicker, control: SharedControl, signals: PickerSignals, high_accuracy: bool) {
    let ticket = control.borrow_mut().begin();
    signals.locate_state.set(LocateState::Locating);

    current_position(high_accuracy, move |result| {
        let resolution = control.borrow_mut().resolve(ticket, result);
        match resolution {
            LocateResolution::Apply(at) => {
                picker.borrow_mut().select(at);
                signals.selected.set(Some(at));
            }
            LocateResolution::Failed(reason) => {
                log::warn!("geolocation failed: {}", reason);
                if let Some(win) = web_sys::window() {
                    let _ = win.alert_with_message(LOCATE_FAILED_MESSAGE);
                }
            }
            LocateResolution::Stale => {
                log::debug!("dropping superseded geolocation result");
                return;
            }
        }
        signals.locate_state.set(control.borrow().state());
    });
}
