//! Host command bridge used by the Tauri-backed adapters.
//!
//! The public surface here is transport-neutral; `interop` decides whether a call reaches the
//! Tauri `invoke` binding or the non-wasm shim.

mod interop;

use launcher_host::{ApplicationRecord, IconPayload};

pub async fn list_apps() -> Result<Vec<ApplicationRecord>, String> {
    interop::list_apps().await
}

pub async fn app_icon(launch_path: &str) -> Result<Option<IconPayload>, String> {
    interop::app_icon(launch_path).await
}

pub async fn launch_app(launch_path: &str) -> Result<(), String> {
    interop::launch_app(launch_path).await
}

pub async fn save_app_category(launch_path: &str, category: &str) -> Result<(), String> {
    interop::save_app_category(launch_path, category).await
}
