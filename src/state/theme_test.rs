use super::*;

#[test]
fn default_preference_is_dark_night() {
    let pref = ThemePreference::default();
    assert_eq!(pref.mode, ThemeMode::Dark);
    assert_eq!(pref.time_of_day, TimeOfDay::Night);
}

#[test]
fn resolve_prefers_stored_value_over_os_signal() {
    let pref = ThemePreference::resolve(Some("dark"), None, true);
    assert_eq!(pref, ThemePreference::for_mode(ThemeMode::Dark));
}

#[test]
fn resolve_falls_back_to_os_light_signal() {
    let pref = ThemePreference::resolve(None, None, true);
    assert_eq!(pref.mode, ThemeMode::Light);
    assert_eq!(pref.time_of_day, TimeOfDay::Day);
}

#[test]
fn resolve_defaults_to_dark_without_signals() {
    assert_eq!(ThemePreference::resolve(None, None, false), ThemePreference::default());
    assert_eq!(ThemePreference::resolve(Some("sepia"), Some("dusk"), false), ThemePreference::default());
}

#[test]
fn resolve_accepts_legacy_encoding() {
    assert_eq!(ThemePreference::resolve(Some("light-theme"), Some("day"), false).mode, ThemeMode::Light);
    assert_eq!(ThemePreference::resolve(Some("dark-theme"), None, true).mode, ThemeMode::Dark);
}

#[test]
fn resolve_keeps_stored_indicator() {
    let pref = ThemePreference::resolve(Some("dark"), Some("day"), false);
    assert_eq!(pref.time_of_day, TimeOfDay::Day);
}

#[test]
fn toggled_switches_body_class_and_stored_value() {
    for start in [ThemeMode::Dark, ThemeMode::Light] {
        let before = ThemePreference::for_mode(start);
        let after = before.toggled();
        assert_ne!(after.mode.body_class(), before.mode.body_class());
        assert_eq!(after.mode.opposite().body_class(), before.mode.body_class());
        assert_eq!(after.storage_entries()[0], (THEME_STORAGE_KEY, after.mode.storage_value()));
        assert_eq!(ThemeMode::from_storage(after.storage_entries()[0].1), Some(after.mode));
        assert_eq!(after.toggled(), before);
    }
}

#[test]
fn body_classes_resolve_only_when_exclusive() {
    assert_eq!(ThemeMode::from_body_classes(true, false), Some(ThemeMode::Dark));
    assert_eq!(ThemeMode::from_body_classes(false, true), Some(ThemeMode::Light));
    assert_eq!(ThemeMode::from_body_classes(true, true), None);
    assert_eq!(ThemeMode::from_body_classes(false, false), None);
}
