//! Browser measurements used by scroll and pointer listeners.
//!
//! Outside the browser these report an empty viewport, so listeners that
//! fire on the server (they never should) fall back to inert values.

use leptos::web_sys::Element;

/// Vertical scroll offset of the window in pixels
pub fn scroll_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        leptos::prelude::window().scroll_y().unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Inner width and height of the window
pub fn viewport_size() -> (f64, f64) {
    #[cfg(feature = "hydrate")]
    {
        let window = leptos::prelude::window();
        let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        (read(window.inner_width()), read(window.inner_height()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (0.0, 0.0)
    }
}

/// Whether any part of `el` is inside the viewport
#[allow(unused_variables)]
pub fn is_in_viewport(el: &Element) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let rect = el.get_bounding_client_rect();
        let (_, height) = viewport_size();
        crate::state::reveal::intersects_viewport(rect.top(), rect.bottom(), height)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
