use std::time::Duration;

use launcher_host::unix_time_ms_now;
use leptos::{create_effect, set_timeout, spawn_local, Callable, Callback};

use crate::{host::LauncherHostContext, orchestration, persistence, reducer::LauncherAction};

pub(super) fn install_boot_hydration(
    host: LauncherHostContext,
    dispatch: Callback<LauncherAction>,
) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            let started_ms = unix_time_ms_now();

            let prefs = host.prefs_store();
            let theme = persistence::load_theme(&*prefs).await;
            dispatch.call(LauncherAction::HydrateTheme { theme });

            let apps = host.app_host_service();
            dispatch.call(orchestration::load_catalog(&*apps).await);

            let remaining = orchestration::overlay_remaining_ms(started_ms, unix_time_ms_now());
            if remaining == 0 {
                dispatch.call(LauncherAction::DismissLoadingOverlay);
            } else {
                set_timeout(
                    move || dispatch.call(LauncherAction::DismissLoadingOverlay),
                    Duration::from_millis(remaining),
                );
            }
        });
    });
}
