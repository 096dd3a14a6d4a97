//! Theme preference store backed by `localStorage` and the `<body>` classes.
//!
//! Reads the stored preference (falling back to the OS colour scheme) and
//! applies it as mutually exclusive `dark-theme` / `light-theme` classes on
//! `<body>`. The day/night indicator is rendered from the same preference by
//! the theme toggle component.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behaviour; native builds no-op so
//! rendering stays deterministic.

use crate::state::theme::ThemePreference;
#[cfg(feature = "csr")]
use crate::state::theme::{THEME_STORAGE_KEY, TIME_OF_DAY_STORAGE_KEY, ThemeMode};

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(feature = "csr")]
fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()?.document()?.body()
}

/// Preference to apply at load: stored keys, then the OS light-scheme
/// signal, then dark/night.
pub fn read_preference() -> ThemePreference {
    #[cfg(feature = "csr")]
    {
        let storage = storage();
        let stored = |key: &str| storage.as_ref().and_then(|s| s.get_item(key).ok().flatten());
        let mode = stored(THEME_STORAGE_KEY);
        let time_of_day = stored(TIME_OF_DAY_STORAGE_KEY);
        let prefers_light = super::media::matches(crate::state::layout::LIGHT_SCHEME_QUERY);
        ThemePreference::resolve(mode.as_deref(), time_of_day.as_deref(), prefers_light)
    }
    #[cfg(not(feature = "csr"))]
    {
        ThemePreference::default()
    }
}

/// Swap the body mode class and persist both keys.
pub fn apply(pref: ThemePreference) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = body() {
            let classes = body.class_list();
            let _ = classes.remove_1(pref.mode.opposite().body_class());
            let _ = classes.add_1(pref.mode.body_class());
        }
        if let Some(storage) = storage() {
            for (key, value) in pref.storage_entries() {
                if let Err(e) = storage.set_item(key, value) {
                    leptos::logging::warn!("theme: could not persist {key}: {e:?}");
                }
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = pref;
    }
}

/// Mode currently applied to `<body>`, if exactly one mode class is present.
#[cfg(feature = "csr")]
fn applied_mode() -> Option<ThemeMode> {
    let classes = body()?.class_list();
    ThemeMode::from_body_classes(
        classes.contains(ThemeMode::Dark.body_class()),
        classes.contains(ThemeMode::Light.body_class()),
    )
}

/// Flip the applied mode (read from the DOM, not storage) together with the
/// indicator, apply and persist the result.
pub fn toggle(current: ThemePreference) -> ThemePreference {
    #[cfg(feature = "csr")]
    let current = applied_mode().map_or(current, |mode| ThemePreference { mode, ..current });
    let next = current.toggled();
    apply(next);
    next
}
