use dash_common::ViewportClassifier;
use dioxus::dioxus_core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;

use crate::wasm_utils::{viewport_width, EventListener};

/// Hook reporting whether the viewport is narrower than `breakpoint_px`.
///
/// Classifies once after mount and again on every window `resize`. The signal
/// is only written when the classification flips. The resize listener is
/// removed when the calling component unmounts.
pub fn use_viewport_is_mobile(breakpoint_px: f64) -> ReadSignal<bool> {
    let mut is_mobile = use_signal(|| false);
    let mut resize_listener: Signal<Option<EventListener>> = use_signal(|| None);

    // use_effect instead of use_hook: window access during render can hit the
    // wry-bindgen bridge before it is ready.
    use_effect(move || {
        if resize_listener.peek().is_some() {
            return;
        }
        let Some(window) = web_sys_x::window() else {
            return;
        };

        // Seeded with the signal's value so a desktop load writes nothing
        let mut classifier = ViewportClassifier::starting_at(breakpoint_px, *is_mobile.peek());
        if let Some(initial) = viewport_width().and_then(|width| classifier.observe(width)) {
            is_mobile.set(initial);
        }

        // The callback runs from wasm-bindgen, outside the Dioxus runtime
        let runtime = Runtime::current();
        let listener = EventListener::new(window, "resize", move |_| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let Some(width) = viewport_width() else {
                return;
            };
            if let Some(next) = classifier.observe(width) {
                tracing::debug!(width, is_mobile = next, "Viewport crossed breakpoint");
                // The signal is gone if a resize lands after unmount
                if let Ok(mut guard) = is_mobile.try_write() {
                    *guard = next;
                }
            }
        });
        resize_listener.set(Some(listener));
    });

    use_drop(move || {
        // Removing the listener during scope teardown trips the same bridge
        // issue, so defer it.
        if let Some(listener) = resize_listener.write().take() {
            spawn(async move {
                drop(listener);
            });
        }
    });

    is_mobile.into()
}
