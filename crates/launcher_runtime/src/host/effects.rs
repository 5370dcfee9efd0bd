use std::time::Duration;

use leptos::{logging, set_timeout, spawn_local, Callable, Callback};

use crate::{
    host::LauncherHostContext,
    model::{EditableField, ThemeId, NOTICE_TTL_MS},
    orchestration, persistence,
    reducer::LauncherAction,
};

pub(super) fn persist_theme(host: LauncherHostContext, theme: ThemeId) {
    spawn_local(async move {
        let prefs = host.prefs_store();
        if let Err(err) = persistence::persist_theme(&*prefs, theme).await {
            logging::warn!("persist theme failed: {err}");
        }
    });
}

pub(super) fn persist_field(
    host: LauncherHostContext,
    dispatch: Callback<LauncherAction>,
    launch_path: String,
    field: EditableField,
    value: String,
    previous: String,
) {
    spawn_local(async move {
        let apps = host.app_host_service();
        let outcome =
            orchestration::persist_field(&*apps, launch_path, field, value, previous).await;
        dispatch.call(outcome);
    });
}

pub(super) fn launch_app(
    host: LauncherHostContext,
    dispatch: Callback<LauncherAction>,
    launch_path: String,
) {
    spawn_local(async move {
        let apps = host.app_host_service();
        if let Some(failure) = orchestration::launch_app(&*apps, launch_path).await {
            dispatch.call(failure);
        }
    });
}

pub(super) fn schedule_notice_dismiss(dispatch: Callback<LauncherAction>, id: u64) {
    set_timeout(
        move || dispatch.call(LauncherAction::DismissNotice { id }),
        Duration::from_millis(NOTICE_TTL_MS),
    );
}
