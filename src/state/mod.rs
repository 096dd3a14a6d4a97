//! Client-side view state for each page controller.
//!
//! DESIGN
//! ======
//! Every controller's state is a plain value type with pure transitions, so
//! the rules (tab exclusivity, flip resets, scroll decay) are testable without
//! a browser. Components wrap these values in `RwSignal`s and re-render from
//! them wholesale.

pub mod flip;
pub mod header;
pub mod hero;
pub mod layout;
pub mod menu;
pub mod projects;
pub mod skills;
pub mod tabs;
pub mod theme;
