use super::*;

fn unsupported() -> String {
    "Tauri host commands are only available when compiled for wasm32".to_string()
}

pub async fn list_apps() -> Result<Vec<ApplicationRecord>, String> {
    Err(unsupported())
}

pub async fn app_icon(_launch_path: &str) -> Result<Option<IconPayload>, String> {
    Err(unsupported())
}

pub async fn launch_app(_launch_path: &str) -> Result<(), String> {
    Err(unsupported())
}

pub async fn save_app_category(_launch_path: &str, _category: &str) -> Result<(), String> {
    Err(unsupported())
}
