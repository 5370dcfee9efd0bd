use std::rc::Rc;

use launcher_host::{
    AppHostFuture, AppHostService, ApplicationRecord, HostCapabilities, HostServices,
    HostStrategy, IconPayload, NoopAppHostService, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};

use crate::{TauriAppHostService, WebPrefsStore};

#[cfg(all(feature = "desktop-host-stub", feature = "desktop-host-tauri"))]
compile_error!(
    "features `desktop-host-stub` and `desktop-host-tauri` are mutually exclusive; enable only one"
);

/// Returns the compile-time selected host strategy. Tauri transport unless
/// `desktop-host-stub` is enabled.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-stub")]
    {
        HostStrategy::DesktopStub
    }

    #[cfg(not(feature = "desktop-host-stub"))]
    {
        HostStrategy::DesktopTauri
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Returns the capability posture of the selected host strategy.
pub const fn host_capabilities() -> HostCapabilities {
    HostCapabilities::for_strategy(selected_host_strategy())
}

/// Adapter enum that erases the concrete application host behind [`AppHostService`].
#[derive(Debug, Clone, Copy)]
pub enum AppHostServiceAdapter {
    /// Tauri `invoke` transport.
    DesktopTauri(TauriAppHostService),
    /// No host process: empty catalog, no-op side effects.
    DesktopStub(NoopAppHostService),
}

impl AppHostService for AppHostServiceAdapter {
    fn list_apps<'a>(&'a self) -> AppHostFuture<'a, Result<Vec<ApplicationRecord>, String>> {
        match self {
            Self::DesktopTauri(service) => service.list_apps(),
            Self::DesktopStub(service) => service.list_apps(),
        }
    }

    fn app_icon<'a>(
        &'a self,
        launch_path: &'a str,
    ) -> AppHostFuture<'a, Result<Option<IconPayload>, String>> {
        match self {
            Self::DesktopTauri(service) => service.app_icon(launch_path),
            Self::DesktopStub(service) => service.app_icon(launch_path),
        }
    }

    fn launch_app<'a>(&'a self, launch_path: &'a str) -> AppHostFuture<'a, Result<(), String>> {
        match self {
            Self::DesktopTauri(service) => service.launch_app(launch_path),
            Self::DesktopStub(service) => service.launch_app(launch_path),
        }
    }

    fn save_app_category<'a>(
        &'a self,
        launch_path: &'a str,
        category: &'a str,
    ) -> AppHostFuture<'a, Result<(), String>> {
        match self {
            Self::DesktopTauri(service) => service.save_app_category(launch_path, category),
            Self::DesktopStub(service) => service.save_app_category(launch_path, category),
        }
    }
}

/// Adapter enum that erases the concrete preference backend behind [`PrefsStore`].
#[derive(Debug, Clone, Copy)]
pub enum PrefsStoreAdapter {
    /// Webview `localStorage`.
    DesktopTauri(WebPrefsStore),
    /// Nothing persisted.
    DesktopStub(NoopPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        match self {
            Self::DesktopTauri(store) => store.load_pref(key),
            Self::DesktopStub(store) => store.load_pref(key),
        }
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::DesktopTauri(store) => store.save_pref(key, value),
            Self::DesktopStub(store) => store.save_pref(key, value),
        }
    }
}

/// Builds the application host adapter for the compile-time selected host strategy.
pub fn app_host_service() -> AppHostServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::DesktopTauri => AppHostServiceAdapter::DesktopTauri(TauriAppHostService),
        HostStrategy::DesktopStub => AppHostServiceAdapter::DesktopStub(NoopAppHostService),
    }
}

/// Builds the preferences adapter for the compile-time selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::DesktopTauri => PrefsStoreAdapter::DesktopTauri(WebPrefsStore),
        HostStrategy::DesktopStub => PrefsStoreAdapter::DesktopStub(NoopPrefsStore),
    }
}

/// Assembles the [`HostServices`] bundle the launcher runtime is mounted with.
pub fn build_host_services() -> HostServices {
    HostServices::new(
        Rc::new(app_host_service()),
        Rc::new(prefs_store()),
        selected_host_strategy(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_matches_selected_strategy() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, selected_host_strategy());
        assert_eq!(services.capabilities, host_capabilities());
        assert_eq!(host_strategy_name(), selected_host_strategy().as_str());
    }

    #[cfg(not(feature = "desktop-host-stub"))]
    #[test]
    fn default_build_selects_tauri_transport() {
        assert_eq!(selected_host_strategy(), HostStrategy::DesktopTauri);
        assert!(matches!(
            app_host_service(),
            AppHostServiceAdapter::DesktopTauri(_)
        ));
        assert!(matches!(prefs_store(), PrefsStoreAdapter::DesktopTauri(_)));
    }
}
