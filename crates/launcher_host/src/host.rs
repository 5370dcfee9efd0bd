//! Host bundle and capability posture injected into the launcher runtime.

use std::rc::Rc;

use crate::{AppHostService, PrefsStore};

/// Host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Tauri-hosted desktop composition.
    DesktopTauri,
    /// Desktop composition with in-memory/no-op adapters and no host process.
    DesktopStub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DesktopTauri => "desktop-tauri",
            Self::DesktopStub => "desktop-stub",
        }
    }
}

/// Availability of one optional host capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is usable.
    Available,
    /// Capability is not supported on the active host.
    Unavailable,
}

impl CapabilityStatus {
    /// Returns whether the capability can be used.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Capability snapshot used by the UI to hide affordances the host cannot honor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Launching applications through the host.
    pub app_launch: CapabilityStatus,
    /// Persisting category overrides through the host.
    pub category_persistence: CapabilityStatus,
}

impl HostCapabilities {
    /// Desktop Tauri capability posture.
    pub const fn desktop_tauri() -> Self {
        Self {
            app_launch: CapabilityStatus::Available,
            category_persistence: CapabilityStatus::Available,
        }
    }

    /// Stub desktop capability posture.
    pub const fn desktop_stub() -> Self {
        Self {
            app_launch: CapabilityStatus::Unavailable,
            category_persistence: CapabilityStatus::Unavailable,
        }
    }

    /// Capability posture for `strategy`.
    pub const fn for_strategy(strategy: HostStrategy) -> Self {
        match strategy {
            HostStrategy::DesktopTauri => Self::desktop_tauri(),
            HostStrategy::DesktopStub => Self::desktop_stub(),
        }
    }
}

/// Host service bundle handed to the launcher runtime.
///
/// Adapter selection happens before this bundle crosses into `launcher_runtime`, so the runtime
/// never names a transport.
#[derive(Clone)]
pub struct HostServices {
    /// Application catalog, icon, launch, and category-override service.
    pub apps: Rc<dyn AppHostService>,
    /// Preference store holding the active theme.
    pub prefs: Rc<dyn PrefsStore>,
    /// Capability snapshot for the active host.
    pub capabilities: HostCapabilities,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a bundle from explicit services, deriving capabilities from `host_strategy`.
    pub fn new(
        apps: Rc<dyn AppHostService>,
        prefs: Rc<dyn PrefsStore>,
        host_strategy: HostStrategy,
    ) -> Self {
        Self {
            apps,
            prefs,
            capabilities: HostCapabilities::for_strategy(host_strategy),
            host_strategy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryPrefsStore, NoopAppHostService};

    #[test]
    fn stub_posture_hides_host_side_effects() {
        let caps = HostCapabilities::desktop_stub();
        assert!(!caps.app_launch.is_available());
        assert!(!caps.category_persistence.is_available());
        assert!(HostCapabilities::desktop_tauri()
            .category_persistence
            .is_available());
    }

    #[test]
    fn bundle_derives_capabilities_from_strategy() {
        let services = HostServices::new(
            Rc::new(NoopAppHostService),
            Rc::new(MemoryPrefsStore::default()),
            HostStrategy::DesktopTauri,
        );
        assert_eq!(services.capabilities, HostCapabilities::desktop_tauri());
        assert_eq!(services.host_strategy.as_str(), "desktop-tauri");
    }
}
