//! `matchMedia` wrappers.

use leptos::prelude::*;

/// One-shot evaluation of a media query. `false` outside the browser.
pub fn matches(query: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(query).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = query;
        false
    }
}

/// Signal tracking a media query for the lifetime of the page.
///
/// The `change` listener is leaked on purpose: the viewport signals are
/// created once in `App` and live as long as the document.
pub fn use_media_query(query: &'static str) -> Signal<bool> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(list) = web_sys::window().and_then(|w| w.match_media(query).ok().flatten()) else {
            return Signal::derive(|| false);
        };
        let state = RwSignal::new(list.matches());
        let on_change = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
            state.set(ev.matches());
        });
        match list.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref()) {
            Ok(()) => on_change.forget(),
            Err(e) => leptos::logging::warn!("media query {query}: listener not installed: {e:?}"),
        }
        state.into()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = query;
        Signal::derive(|| false)
    }
}
