//! Target-specific transport routing for host commands.

use launcher_host::{ApplicationRecord, IconPayload};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn list_apps() -> Result<Vec<ApplicationRecord>, String> {
    imp::list_apps().await
}

pub async fn app_icon(launch_path: &str) -> Result<Option<IconPayload>, String> {
    imp::app_icon(launch_path).await
}

pub async fn launch_app(launch_path: &str) -> Result<(), String> {
    imp::launch_app(launch_path).await
}

pub async fn save_app_category(launch_path: &str, category: &str) -> Result<(), String> {
    imp::save_app_category(launch_path, category).await
}
