//! Small DOM queries used by event handlers.

use crate::state::flip::ClickOrigin;

/// Whether a click started inside a nested `<a>`.
pub fn click_origin(ev: &leptos::ev::MouseEvent) -> ClickOrigin {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let inside_link = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a").ok().flatten())
            .is_some();
        if inside_link { ClickOrigin::Link } else { ClickOrigin::Surface }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        ClickOrigin::Surface
    }
}

/// Current vertical scroll offset in CSS pixels.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}
