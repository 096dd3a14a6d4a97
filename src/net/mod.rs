//! Networking modules for the static JSON content documents.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs same-origin fetches and `types` defines the content schema
//! plus its read-time migration from older field layouts.

pub mod api;
pub mod types;
