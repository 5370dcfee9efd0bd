//! Host-side runtime helpers that execute reducer effects against the injected host bundle.

mod boot;
mod effects;

use std::rc::Rc;

use launcher_host::{AppHostService, HostCapabilities, HostServices, PrefsStore};
use leptos::Callback;

use crate::{
    icon_cache::IconCache,
    model::NoticeKind,
    reducer::{LauncherAction, RuntimeEffect},
    runtime_context::LauncherRuntimeContext,
    theme::{DocumentThemeSurface, ThemeSurface},
};

const LAUNCH_UNAVAILABLE_MESSAGE: &str = "Launching applications needs the desktop host.";

#[derive(Clone)]
/// Host services plus the runtime-owned resources built on top of them.
pub struct LauncherHostContext {
    apps: Rc<dyn AppHostService>,
    prefs: Rc<dyn PrefsStore>,
    theme_surface: Rc<dyn ThemeSurface>,
    icons: IconCache,
    capabilities: HostCapabilities,
    host_strategy_name: &'static str,
}

impl LauncherHostContext {
    /// Wraps `services`, applying themes to the webview document.
    pub fn new(services: HostServices) -> Self {
        Self::with_theme_surface(services, Rc::new(DocumentThemeSurface))
    }

    /// Wraps `services` with an explicit theme surface.
    pub fn with_theme_surface(services: HostServices, theme_surface: Rc<dyn ThemeSurface>) -> Self {
        let icons = IconCache::new(Rc::clone(&services.apps));
        Self {
            apps: services.apps,
            prefs: services.prefs,
            theme_surface,
            icons,
            capabilities: services.capabilities,
            host_strategy_name: services.host_strategy.as_str(),
        }
    }

    pub fn app_host_service(&self) -> Rc<dyn AppHostService> {
        Rc::clone(&self.apps)
    }

    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        Rc::clone(&self.prefs)
    }

    /// Shared icon cache; clones see the same entries.
    pub fn icon_cache(&self) -> IconCache {
        self.icons.clone()
    }

    pub fn capabilities(&self) -> HostCapabilities {
        self.capabilities
    }

    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Action for a launch request on `launch_path`. Hosts that cannot launch get an info notice
    /// instead of a host round trip.
    pub fn launch_action(&self, launch_path: String) -> LauncherAction {
        if self.capabilities.app_launch.is_available() {
            LauncherAction::LaunchApp { launch_path }
        } else {
            LauncherAction::PushNotice {
                kind: NoticeKind::Info,
                message: LAUNCH_UNAVAILABLE_MESSAGE.to_string(),
            }
        }
    }

    /// Installs the boot sequence: theme, catalog, then overlay dismissal once the minimum
    /// display time has passed.
    pub fn install_boot_hydration(&self, dispatch: Callback<LauncherAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: LauncherRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::ApplyTheme(theme) => {
                self.theme_surface.apply_theme(theme);
            }
            RuntimeEffect::PersistTheme(theme) => effects::persist_theme(self.clone(), theme),
            RuntimeEffect::PersistField {
                launch_path,
                field,
                value,
                previous,
            } => effects::persist_field(
                self.clone(),
                runtime.dispatch,
                launch_path,
                field,
                value,
                previous,
            ),
            RuntimeEffect::LaunchApp { launch_path } => {
                effects::launch_app(self.clone(), runtime.dispatch, launch_path)
            }
            RuntimeEffect::ScheduleNoticeDismiss { id } => {
                effects::schedule_notice_dismiss(runtime.dispatch, id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use launcher_host::{HostStrategy, MemoryAppHostService, MemoryPrefsStore};

    use super::*;
    use crate::{model::ThemeId, theme::MemoryThemeSurface};

    #[test]
    fn context_exposes_bundle_capabilities_and_shares_icon_cache() {
        let services = HostServices::new(
            Rc::new(MemoryAppHostService::default()),
            Rc::new(MemoryPrefsStore::default()),
            HostStrategy::DesktopStub,
        );
        let surface = Rc::new(MemoryThemeSurface::default());
        let host = LauncherHostContext::with_theme_surface(services, surface.clone());

        assert_eq!(host.capabilities(), HostCapabilities::desktop_stub());
        assert_eq!(host.host_strategy_name(), "desktop-stub");

        let _ = futures::executor::block_on(host.icon_cache().resolve("/Apps/Foo"));
        assert_eq!(host.icon_cache().len(), 1);

        assert!(host.theme_surface.apply_theme(ThemeId::Dark));
        assert_eq!(surface.applied_theme().as_deref(), Some("dark"));
    }

    #[test]
    fn launch_requests_follow_the_launch_capability() {
        let memory = MemoryAppHostService::default();
        let stub = LauncherHostContext::with_theme_surface(
            HostServices::new(
                Rc::new(memory.clone()),
                Rc::new(MemoryPrefsStore::default()),
                HostStrategy::DesktopStub,
            ),
            Rc::new(MemoryThemeSurface::default()),
        );
        assert_eq!(
            stub.launch_action("/Apps/Foo".to_string()),
            LauncherAction::PushNotice {
                kind: NoticeKind::Info,
                message: LAUNCH_UNAVAILABLE_MESSAGE.to_string(),
            }
        );

        let tauri = LauncherHostContext::with_theme_surface(
            HostServices::new(
                Rc::new(memory),
                Rc::new(MemoryPrefsStore::default()),
                HostStrategy::DesktopTauri,
            ),
            Rc::new(MemoryThemeSurface::default()),
        );
        assert_eq!(
            tauri.launch_action("/Apps/Foo".to_string()),
            LauncherAction::LaunchApp {
                launch_path: "/Apps/Foo".to_string()
            }
        );
    }
}
