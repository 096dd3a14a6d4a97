//! Header scroll state: "past threshold" and "recently scrolled up".
//!
//! The decay timer is modelled as a ticket. Each upward sample issues a new
//! ticket; an expiring timer only clears the state if its ticket is still the
//! latest, which makes older timers harmless without cancelling them.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

/// Scroll offset at which the header gains its background.
pub const HEADER_THRESHOLD_PX: f64 = 100.0;
/// How long the header stays revealed after an upward scroll.
pub const SCROLL_UP_DECAY_MS: u32 = 3000;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeaderState {
    pub last_y: f64,
    /// `active` class: offset at or beyond the threshold.
    pub past_threshold: bool,
    /// `scrollingUp` class: an upward scroll happened within the decay window.
    pub scrolling_up: bool,
    ticket: u64,
}

impl HeaderState {
    pub fn new(initial_y: f64) -> Self {
        Self {
            last_y: initial_y,
            past_threshold: initial_y >= HEADER_THRESHOLD_PX,
            scrolling_up: false,
            ticket: 0,
        }
    }

    /// Feed one scroll sample.
    ///
    /// Returns a ticket when a fresh decay timer must be scheduled.
    pub fn sample(&mut self, y: f64) -> Option<u64> {
        let issued = if y < self.last_y && y >= HEADER_THRESHOLD_PX {
            self.scrolling_up = true;
            self.ticket += 1;
            Some(self.ticket)
        } else {
            self.scrolling_up = false;
            None
        };
        self.past_threshold = y >= HEADER_THRESHOLD_PX;
        self.last_y = y;
        issued
    }

    /// Decay timer fired. Returns whether the state changed.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.ticket || !self.scrolling_up {
            return false;
        }
        self.scrolling_up = false;
        true
    }
}
