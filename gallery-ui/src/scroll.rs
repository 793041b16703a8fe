//! Scroll-triggered reveal for the gallery grid
//!
//! `use_scroll_reveal` watches window scrolling and fires a callback each time
//! the bottom of the viewport comes within a threshold of the end of the page.
//! The listener is held by a [`WindowEventListener`], which the hook drops on
//! unmount, so leaving the page leaves no `scroll` handler on `window`.

use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};
use gallery_common::scroll::near_bottom;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Handle to a listener registered on `window`.
///
/// Owns the wasm-bindgen closure backing the listener; dropping the handle
/// unregisters it and frees the closure.
pub struct WindowEventListener {
    window: web_sys::Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowEventListener {
    /// Registers `callback` for `event_name` events on `window`.
    pub fn new(
        window: web_sys::Window,
        event_name: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(web_sys::Event)> = Closure::wrap(Box::new(callback));

        window
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            window,
            event_name,
            callback,
        }
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Scroll offset, viewport height and document height
fn scroll_metrics(window: &web_sys::Window) -> Option<(f64, f64, f64)> {
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = window.document()?.body()?.offset_height() as f64;
    Some((scroll_y, viewport_height, document_height))
}

/// Call `on_reveal` whenever the page is scrolled to within `threshold_px` of
/// the bottom. The listener is removed when the calling component unmounts.
pub fn use_scroll_reveal(threshold_px: f64, on_reveal: EventHandler<()>) {
    let mut listener: Signal<Option<WindowEventListener>> = use_signal(|| None);

    // Attach after the first render, once the document exists.
    use_effect(move || {
        let Some(window) = web_sys::window() else {
            warn!("No window available, scroll reveal disabled");
            return;
        };

        // The scroll callback runs from wasm-bindgen, outside the Dioxus
        // runtime. Re-enter it so the reveal can write to stores.
        let runtime = Runtime::current();
        let target = window.clone();

        let attached = WindowEventListener::new(window, "scroll", move |_| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let Some((scroll_y, viewport_height, document_height)) = scroll_metrics(&target)
            else {
                return;
            };
            if near_bottom(scroll_y, viewport_height, document_height, threshold_px) {
                on_reveal.call(());
            }
        });

        listener.set(Some(attached));
    });

    use_drop(move || {
        if let Ok(mut guard) = listener.try_write() {
            guard.take();
        }
    });
}
