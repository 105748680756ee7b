//! One-shot geolocation.
//!
//! Uses the options the map screen asks for: high accuracy, a 15 second
//! timeout, and cached positions up to 10 seconds old. Native builds have no
//! position source and report `POSITION_UNAVAILABLE`.

use model::GeoPoint;

/// Geolocation failure: the W3C error code plus its message.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoError {
    pub code: u16,
    pub message: String,
}

impl std::fmt::Display for GeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "geolocation error {}: {}", self.code, self.message)
    }
}

/// Resolve the device's current position once.
#[cfg(target_arch = "wasm32")]
pub async fn current_position() -> Result<GeoPoint, GeoError> {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or_else(|| GeoError {
        code: 2,
        message: "no window".to_string(),
    })?;
    let geolocation = window.navigator().geolocation().map_err(|_| GeoError {
        code: 1,
        message: "geolocation unavailable".to_string(),
    })?;

    let (tx, rx) = futures_channel::oneshot::channel::<Result<GeoPoint, GeoError>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let success_tx = tx.clone();
    let on_success =
        Closure::<dyn FnMut(web_sys::Position)>::new(move |position: web_sys::Position| {
            let coords = position.coords();
            if let Some(tx) = success_tx.borrow_mut().take() {
                let _ = tx.send(Ok(GeoPoint {
                    latitude: coords.latitude(),
                    longitude: coords.longitude(),
                }));
            }
        });

    let error_tx = tx.clone();
    let on_error =
        Closure::<dyn FnMut(web_sys::PositionError)>::new(move |err: web_sys::PositionError| {
            if let Some(tx) = error_tx.borrow_mut().take() {
                let _ = tx.send(Err(GeoError {
                    code: err.code(),
                    message: err.message(),
                }));
            }
        });

    let options = web_sys::PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(15_000);
    options.set_maximum_age(10_000);

    geolocation
        .get_current_position_with_error_callback_and_options(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
            &options,
        )
        .map_err(|_| GeoError {
            code: 2,
            message: "geolocation request rejected".to_string(),
        })?;

    let result = rx.await.unwrap_or_else(|_| {
        Err(GeoError {
            code: 2,
            message: "geolocation callback dropped".to_string(),
        })
    });

    // Keep the callbacks alive until one of them has fired
    drop(on_success);
    drop(on_error);

    result
}

/// Native builds have no position source.
#[cfg(not(target_arch = "wasm32"))]
pub async fn current_position() -> Result<GeoPoint, GeoError> {
    Err(GeoError {
        code: 2,
        message: "geolocation is only available in the browser".to_string(),
    })
}
