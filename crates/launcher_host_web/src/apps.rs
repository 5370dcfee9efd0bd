//! Tauri command-backed application host service.

use launcher_host::{
    AppHostFuture, AppHostOperation, AppHostService, ApplicationRecord, IconPayload,
};

use crate::timer::with_deadline;

/// Deadline applied to every host command before it is reported as timed out.
pub const HOST_CALL_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, Copy, Default)]
/// Application host service that reaches the desktop host through Tauri `invoke`.
///
/// A hung host command resolves to an error after [`HOST_CALL_TIMEOUT_MS`] instead of leaving
/// the caller suspended forever.
pub struct TauriAppHostService;

impl AppHostService for TauriAppHostService {
    fn list_apps<'a>(&'a self) -> AppHostFuture<'a, Result<Vec<ApplicationRecord>, String>> {
        Box::pin(async move {
            with_deadline(
                AppHostOperation::ListApps.command(),
                HOST_CALL_TIMEOUT_MS,
                crate::bridge::list_apps(),
            )
            .await
        })
    }

    fn app_icon<'a>(
        &'a self,
        launch_path: &'a str,
    ) -> AppHostFuture<'a, Result<Option<IconPayload>, String>> {
        Box::pin(async move {
            with_deadline(
                AppHostOperation::AppIcon.command(),
                HOST_CALL_TIMEOUT_MS,
                crate::bridge::app_icon(launch_path),
            )
            .await
        })
    }

    fn launch_app<'a>(&'a self, launch_path: &'a str) -> AppHostFuture<'a, Result<(), String>> {
        Box::pin(async move {
            with_deadline(
                AppHostOperation::LaunchApp.command(),
                HOST_CALL_TIMEOUT_MS,
                crate::bridge::launch_app(launch_path),
            )
            .await
        })
    }

    fn save_app_category<'a>(
        &'a self,
        launch_path: &'a str,
        category: &'a str,
    ) -> AppHostFuture<'a, Result<(), String>> {
        Box::pin(async move {
            with_deadline(
                AppHostOperation::SaveAppCategory.command(),
                HOST_CALL_TIMEOUT_MS,
                crate::bridge::save_app_category(launch_path, category),
            )
            .await
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_tauri_app_host_surfaces_bridge_errors() {
        let service: &dyn AppHostService = &TauriAppHostService;

        assert!(block_on(service.list_apps()).is_err());
        assert!(block_on(service.app_icon("/Apps/Foo")).is_err());
        assert!(block_on(service.launch_app("/Apps/Foo")).is_err());
        assert!(block_on(service.save_app_category("/Apps/Foo", "Games")).is_err());
    }
}
