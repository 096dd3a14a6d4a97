//! Front/back state of a flip card.

#[cfg(test)]
#[path = "flip_test.rs"]
mod flip_test;

/// Where a click on a flip trigger started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOrigin {
    /// The trigger itself or plain content inside it.
    Surface,
    /// A hyperlink nested inside the trigger; it must keep navigating.
    Link,
}

/// Cards are always created front-facing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlipState {
    flipped: bool,
}

impl FlipState {
    pub fn is_flipped(self) -> bool {
        self.flipped
    }

    /// Invert the face and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.flipped = !self.flipped;
        self.flipped
    }

    pub fn set(&mut self, flipped: bool) {
        self.flipped = flipped;
    }

    pub fn reset(&mut self) {
        self.flipped = false;
    }

    /// Apply a trigger click. Returns whether the face changed.
    pub fn handle_click(&mut self, origin: ClickOrigin) -> bool {
        match origin {
            ClickOrigin::Link => false,
            ClickOrigin::Surface => {
                self.toggle();
                true
            }
        }
    }

    /// Value for every trigger's `aria-pressed` attribute.
    pub fn aria_pressed(self) -> &'static str {
        if self.flipped { "true" } else { "false" }
    }
}
