//! Browser binding of the pointer tracker.
//!
//! Listens for `mousemove` on `window` and forwards viewport (`client*`)
//! coordinates. The listener lives exactly as long as the subscription that
//! `PointerTracker::activate` returns.

use crate::logging::{DEBUG_POINTER, debug_log, log_critical};
use shared::pointer::{PointerEventSource, PointerListener, PointerPosition, Unsubscribe};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

const MOUSE_MOVE: &str = "mousemove";

/// The browser window as a [`PointerEventSource`].
pub struct WindowPointerSource;

impl PointerEventSource for WindowPointerSource {
    fn subscribe(&self, mut listener: PointerListener) -> Result<Unsubscribe, String> {
        let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;

        let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            let position = PointerPosition::new(f64::from(event.client_x()), f64::from(event.client_y()));
            debug_log!(DEBUG_POINTER, "pointer moved to ({}, {})", position.x, position.y);
            listener(position);
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);

        window
            .add_event_listener_with_callback(MOUSE_MOVE, closure.as_ref().unchecked_ref())
            .map_err(|error| format!("failed to add {MOUSE_MOVE} listener: {error:?}"))?;

        Ok(Box::new(move || {
            if let Err(error) =
                window.remove_event_listener_with_callback(MOUSE_MOVE, closure.as_ref().unchecked_ref())
            {
                log_critical(&format!("failed to remove {MOUSE_MOVE} listener: {error:?}"));
            }
            // `closure` is dropped here, after the browser no longer references it.
        }))
    }
}
