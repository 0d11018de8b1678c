//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup
//!
//! A JavaScript listener backed by a Rust `Closure` must not outlive the
//! closure, and `closure.forget()` leaks it and leaves the listener attached
//! forever. [`EventListener`] owns the closure and removes the listener in
//! `Drop`, so the subscription lasts exactly as long as the value:
//!
//! ```ignore
//! let listener = EventListener::new(window, "resize", callback);
//! drop(listener); // listener removed
//! ```
//!
//! Inside components, keep it in a `Signal<Option<EventListener>>` and take it
//! out in `use_drop`.

use wasm_bindgen_x::prelude::*;

/// An event listener on any `EventTarget` (window, document, element) that
/// removes itself when dropped.
pub struct EventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl EventListener {
    pub fn new(
        target: impl Into<web_sys_x::EventTarget>,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let target = target.into();
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        if target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!(event_name, "Failed to attach event listener");
        }

        Self {
            target,
            event_name,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Current `window.innerWidth` in CSS pixels
pub fn viewport_width() -> Option<f64> {
    web_sys_x::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}
