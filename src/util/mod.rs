//! Browser helpers shared by the page components.
//!
//! Everything here talks to `web-sys` only behind the `csr` feature. Native
//! builds (tests, SSR rendering checks) get inert fallbacks with the same
//! signatures so the components compile and render unchanged.

pub mod dom;
pub mod media;
pub mod reveal;
pub mod theme;
