//! Host round trips for catalog hydration, field persistence, and launching.
//!
//! Each function awaits one host call and converts the outcome into the [`LauncherAction`] the
//! provider should dispatch. Host errors are logged here and never escape.

use launcher_host::AppHostService;
use leptos::logging;

use crate::{
    model::{EditableField, MIN_LOADING_OVERLAY_MS},
    reducer::LauncherAction,
};

/// Milliseconds the loading overlay must still stay up, given when boot started.
pub fn overlay_remaining_ms(started_ms: u64, now_ms: u64) -> u64 {
    MIN_LOADING_OVERLAY_MS.saturating_sub(launcher_host::elapsed_ms_since(started_ms, now_ms))
}

/// Enumerates the catalog. A failure becomes [`LauncherAction::CatalogLoadFailed`].
pub async fn load_catalog(host: &dyn AppHostService) -> LauncherAction {
    match host.list_apps().await {
        Ok(apps) => {
            logging::log!("catalog loaded with {} applications", apps.len());
            LauncherAction::CatalogLoaded { apps }
        }
        Err(error) => {
            logging::warn!("catalog load failed: {error}");
            LauncherAction::CatalogLoadFailed { error }
        }
    }
}

/// Writes one edited field through the host.
pub async fn persist_field(
    host: &dyn AppHostService,
    launch_path: String,
    field: EditableField,
    value: String,
    previous: String,
) -> LauncherAction {
    let result = match field {
        EditableField::Category => host.save_app_category(&launch_path, &value).await,
    };
    match result {
        Ok(()) => LauncherAction::FieldPersisted {
            launch_path,
            field,
            value,
        },
        Err(error) => {
            logging::warn!("persist {} for `{launch_path}` failed: {error}", field.label());
            LauncherAction::FieldPersistFailed {
                launch_path,
                field,
                attempted: value,
                previous,
                error,
            }
        }
    }
}

/// Launches `launch_path`. Returns an action only when the launch failed.
pub async fn launch_app(host: &dyn AppHostService, launch_path: String) -> Option<LauncherAction> {
    match host.launch_app(&launch_path).await {
        Ok(()) => None,
        Err(error) => {
            logging::warn!("launch of `{launch_path}` failed: {error}");
            Some(LauncherAction::LaunchFailed { launch_path, error })
        }
    }
}
