//! Webview-local storage adapters.

pub mod local_prefs;
