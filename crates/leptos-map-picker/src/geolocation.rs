//! One-shot browser geolocation lookup.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Position, PositionError, PositionOptions};

use crate::Coordinate;

/// Ask the browser for the current position once.
///
/// `on_result` is called exactly once, with either the position or a short
/// reason. No timeout is set; a browser that never answers never calls back.
pub fn current_position<F>(high_accuracy: bool, on_result: F)
where
    F: FnOnce(Result<Coordinate, String>) + 'static,
{
    let geolocation = match web_sys::window()
        .ok_or_else(|| "no window".to_string())
        .and_then(|w| w.navigator().geolocation().map_err(|e| format!("{:?}", e)))
    {
        Ok(g) => g,
        Err(reason) => {
            on_result(Err(reason));
            return;
        }
    };

    // Only one of the two callbacks ever fires; share the continuation.
    let on_result = std::rc::Rc::new(std::cell::RefCell::new(Some(on_result)));
    let on_success = on_result.clone();

    let success = Closure::<dyn FnMut(Position)>::new(move |pos: Position| {
        let coords = pos.coords();
        if let Some(f) = on_success.borrow_mut().take() {
            f(Ok(Coordinate::new(coords.latitude(), coords.longitude())));
        }
    });
    let on_failure = on_result.clone();
    let failure = Closure::<dyn FnMut(PositionError)>::new(move |err: PositionError| {
        if let Some(f) = on_failure.borrow_mut().take() {
            f(Err(err.message()));
        }
    });

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(high_accuracy);

    let requested = geolocation.get_current_position_with_error_callback_and_options(
        success.as_ref().unchecked_ref(),
        Some(failure.as_ref().unchecked_ref()),
        &options,
    );
    success.forget();
    failure.forget();

    if let Err(e) = requested {
        if let Some(f) = on_result.borrow_mut().take() {
            f(Err(format!("{:?}", e)));
        }
    }
}
