//! Hero card with the About content as its breakpoint-dependent back face.
//!
//! Below the hero breakpoint the About content is mounted as the hero's back
//! face behind a single toggle button. At and above it, the same content is a
//! standalone section and the hero never flips. Every crossing resets the
//! hero to its front face.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use super::flip::FlipState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AboutMount {
    /// Back face of the hero flip card.
    BackFace,
    /// Standalone section ahead of the experience section.
    #[default]
    Section,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeroState {
    pub mount: AboutMount,
    pub flip: FlipState,
}

impl HeroState {
    /// Apply the current breakpoint. The hero always ends front-facing.
    pub fn set_stacked(&mut self, stacked: bool) {
        self.mount = if stacked { AboutMount::BackFace } else { AboutMount::Section };
        self.flip.reset();
    }

    pub fn has_toggle(self) -> bool {
        self.mount == AboutMount::BackFace
    }

    /// Toggle button click. Only meaningful while About is the back face.
    pub fn toggle(&mut self) -> bool {
        if !self.has_toggle() {
            return false;
        }
        self.flip.toggle();
        true
    }

    /// An `#about` link was followed. Returns `true` when the hero flipped
    /// instead, in which case the link's default scroll must be suppressed.
    pub fn show_about(&mut self) -> bool {
        if !self.has_toggle() {
            return false;
        }
        self.flip.set(true);
        true
    }

    /// Screen-reader text for the toggle button.
    pub fn toggle_label(self) -> &'static str {
        if self.flip.is_flipped() { "Back to Intro" } else { "Show About" }
    }
}
