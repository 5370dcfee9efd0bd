//! Client-local durable storage contracts.

pub mod prefs;
