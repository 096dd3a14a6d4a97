//! Breakpoints and the layouts they select.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Below this width projects render as a stacked list.
pub const PROJECTS_STACKED_QUERY: &str = "(max-width: 767px)";
/// Below 1024px the About content becomes the hero card's back face.
pub const HERO_STACKED_QUERY: &str = "(max-width: 1023.98px)";
/// Below 768px the theme button lives in the header.
pub const COMPACT_HEADER_QUERY: &str = "(max-width: 767.98px)";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const LIGHT_SCHEME_QUERY: &str = "(prefers-color-scheme: light)";

/// Project panel rendering mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectLayout {
    /// Tab strip plus the selected project as a single card.
    #[default]
    Tabbed,
    /// Every project as its own card, tab strip hidden.
    Stacked,
}

impl ProjectLayout {
    pub fn from_stacked(stacked: bool) -> Self {
        if stacked { Self::Stacked } else { Self::Tabbed }
    }
}

/// Where the theme toggle button is mounted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeButtonMount {
    Header,
    #[default]
    Main,
}

impl ThemeButtonMount {
    pub fn from_compact(compact: bool) -> Self {
        if compact { Self::Header } else { Self::Main }
    }
}
