//! One-shot browser geolocation.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Position, PositionError, PositionOptions};

use super::Locator;
use crate::config::GeolocationConfig;
use crate::error::LocateError;
use crate::model::Coordinate;

type Reply = Rc<RefCell<Option<oneshot::Sender<Result<Coordinate, LocateError>>>>>;

#[derive(Clone, Debug)]
pub struct BrowserLocator {
    config: GeolocationConfig,
}

impl BrowserLocator {
    pub fn new(config: &GeolocationConfig) -> Self {
        Self { config: config.clone() }
    }

    fn options(&self) -> PositionOptions {
        let options = PositionOptions::new();
        options.set_enable_high_accuracy(self.config.high_accuracy);
        options.set_timeout(self.config.timeout_ms);
        options.set_maximum_age(self.config.maximum_age_ms);
        options
    }
}

fn require_api<T>(handle: Option<T>) -> Result<T, LocateError> {
    handle.ok_or(LocateError::Unsupported)
}

impl Locator for BrowserLocator {
    async fn locate(&self) -> Result<Coordinate, LocateError> {
        let navigator = web_sys::window().ok_or(LocateError::Unsupported)?.navigator();
        // the getter hands back `undefined` unchecked when the API is missing
        let handle = navigator
            .geolocation()
            .ok()
            .filter(|g| !g.is_undefined() && !g.is_null());
        let geolocation = require_api(handle)?;

        let (tx, rx) = oneshot::channel();
        let reply: Reply = Rc::new(RefCell::new(Some(tx)));

        let on_success = {
            let reply = reply.clone();
            Closure::once(move |pos: JsValue| {
                let coords = pos.unchecked_into::<Position>().coords();
                let c = Coordinate::new(coords.latitude(), coords.longitude());
                let result = if c.is_valid() { Ok(c) } else { Err(LocateError::PositionUnavailable) };
                if let Some(tx) = reply.borrow_mut().take() {
                    let _ = tx.send(result);
                }
            })
        };
        let on_error = {
            let reply = reply.clone();
            Closure::once(move |err: JsValue| {
                let code = err.unchecked_into::<PositionError>().code();
                if let Some(tx) = reply.borrow_mut().take() {
                    let _ = tx.send(Err(LocateError::from_code(code)));
                }
            })
        };

        geolocation
            .get_current_position_with_error_callback_and_options(
                on_success.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
                &self.options(),
            )
            .map_err(|_| LocateError::Unknown)?;

        // closures stay alive until the browser has called one of them
        let result = rx.await.unwrap_or(Err(LocateError::Unknown));
        drop(on_success);
        drop(on_error);
        result
    }
}
