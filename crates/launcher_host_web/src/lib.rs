//! Webview implementations of [`launcher_host`] service contracts.
//!
//! Application catalog, icon, launch, and category calls travel over the Tauri `invoke`
//! transport, each raced against a transport deadline. Preferences live in `localStorage`.
//!
//! Bridge bindings live under `bridge/`, with `bridge::interop` holding the wasm and non-wasm
//! transport glue.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod apps;
mod bridge;
pub mod storage;
pub mod timer;

pub use adapters::{
    app_host_service, build_host_services, host_capabilities, host_strategy_name, prefs_store,
    selected_host_strategy, AppHostServiceAdapter, PrefsStoreAdapter,
};
pub use apps::{TauriAppHostService, HOST_CALL_TIMEOUT_MS};
pub use storage::local_prefs::WebPrefsStore;
pub use timer::{race_deadline, sleep_ms, with_deadline};
