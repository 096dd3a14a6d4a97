//! # portfolio-site
//!
//! Leptos + WASM behaviour layer for a single-page personal portfolio.
//!
//! The page is a set of independent sections (header and navigation, hero
//! flip card, experience tabs, project cards, skills) that each fetch a
//! small JSON document and render from it. Controller rules live as plain
//! value types in `state`; `components` wrap them in signals; `util` holds
//! the browser-only pieces (preference storage, media queries, reveal
//! animations) behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
