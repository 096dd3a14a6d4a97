//! Theme preference: dark/light mode plus the day/night indicator.
//!
//! DESIGN
//! ======
//! Storage uses one canonical encoding (`"dark"` / `"light"`, `"day"` /
//! `"night"`). Older pages wrote `"dark-theme"` / `"light-theme"`; those are
//! still understood on read and replaced on the next write.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key for the theme mode.
pub const THEME_STORAGE_KEY: &str = "theme";
/// `localStorage` key for the day/night indicator.
pub const TIME_OF_DAY_STORAGE_KEY: &str = "tod";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Class applied to `<body>` while this mode is active.
    pub fn body_class(self) -> &'static str {
        match self {
            Self::Dark => "dark-theme",
            Self::Light => "light-theme",
        }
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a stored value, accepting the legacy class-name encoding.
    pub fn from_storage(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" | "dark-theme" => Some(Self::Dark),
            "light" | "light-theme" => Some(Self::Light),
            _ => None,
        }
    }

    /// Mode currently applied to `<body>`, given which classes it carries.
    pub fn from_body_classes(has_dark: bool, has_light: bool) -> Option<Self> {
        match (has_dark, has_light) {
            (true, false) => Some(Self::Dark),
            (false, true) => Some(Self::Light),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeOfDay {
    Day,
    #[default]
    Night,
}

impl TimeOfDay {
    pub fn opposite(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }

    /// Indicator class; doubles as the stored value.
    pub fn class(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    pub fn from_storage(raw: &str) -> Option<Self> {
        match raw.trim() {
            "day" => Some(Self::Day),
            "night" => Some(Self::Night),
            _ => None,
        }
    }

    /// Indicator that naturally accompanies `mode`.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::Night,
            ThemeMode::Light => Self::Day,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemePreference {
    pub mode: ThemeMode,
    pub time_of_day: TimeOfDay,
}

impl ThemePreference {
    pub fn for_mode(mode: ThemeMode) -> Self {
        Self { mode, time_of_day: TimeOfDay::for_mode(mode) }
    }

    /// Initial preference: stored value, then the OS light-scheme signal,
    /// then dark. A missing or unreadable indicator follows the mode.
    pub fn resolve(stored_mode: Option<&str>, stored_time_of_day: Option<&str>, os_prefers_light: bool) -> Self {
        let mode = stored_mode.and_then(ThemeMode::from_storage).unwrap_or(if os_prefers_light {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        });
        let time_of_day = stored_time_of_day
            .and_then(TimeOfDay::from_storage)
            .unwrap_or_else(|| TimeOfDay::for_mode(mode));
        Self { mode, time_of_day }
    }

    /// Both halves flip together.
    pub fn toggled(self) -> Self {
        Self { mode: self.mode.opposite(), time_of_day: self.time_of_day.opposite() }
    }

    /// Key/value pairs written to `localStorage` for this preference.
    pub fn storage_entries(self) -> [(&'static str, &'static str); 2] {
        [
            (THEME_STORAGE_KEY, self.mode.storage_value()),
            (TIME_OF_DAY_STORAGE_KEY, self.time_of_day.class()),
        ]
    }
}
