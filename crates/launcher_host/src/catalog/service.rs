//! Host service contract for application enumeration, icons, launching, and category overrides.

use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    future::Future,
    pin::Pin,
    rc::Rc,
};

use super::types::{ApplicationRecord, IconPayload};

/// Object-safe boxed future used by [`AppHostService`] async methods.
pub type AppHostFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service owning the installed-application catalog and everything derived from it.
///
/// Every operation is an asynchronous, result-bearing round trip. Callers decide whether a
/// failure is surfaced, retried, or swallowed; the contract itself never panics.
pub trait AppHostService {
    /// Enumerates installed applications, with persisted category overrides already applied.
    fn list_apps<'a>(&'a self) -> AppHostFuture<'a, Result<Vec<ApplicationRecord>, String>>;

    /// Resolves the icon for `launch_path`. `Ok(None)` means the host has no icon for it.
    fn app_icon<'a>(
        &'a self,
        launch_path: &'a str,
    ) -> AppHostFuture<'a, Result<Option<IconPayload>, String>>;

    /// Starts the application behind `launch_path`.
    fn launch_app<'a>(&'a self, launch_path: &'a str) -> AppHostFuture<'a, Result<(), String>>;

    /// Persists a category override for `launch_path`.
    fn save_app_category<'a>(
        &'a self,
        launch_path: &'a str,
        category: &'a str,
    ) -> AppHostFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Stable identifiers for the four host operations, used for diagnostics and fault injection.
pub enum AppHostOperation {
    /// [`AppHostService::list_apps`].
    ListApps,
    /// [`AppHostService::app_icon`].
    AppIcon,
    /// [`AppHostService::launch_app`].
    LaunchApp,
    /// [`AppHostService::save_app_category`].
    SaveAppCategory,
}

impl AppHostOperation {
    /// Returns the host command name backing this operation.
    pub const fn command(self) -> &'static str {
        match self {
            Self::ListApps => "get_installed_apps",
            Self::AppIcon => "get_app_icon",
            Self::LaunchApp => "launch_app",
            Self::SaveAppCategory => "save_app_config",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Host adapter for builds without a host process: an empty catalog and no-op side effects.
pub struct NoopAppHostService;

impl AppHostService for NoopAppHostService {
    fn list_apps<'a>(&'a self) -> AppHostFuture<'a, Result<Vec<ApplicationRecord>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn app_icon<'a>(
        &'a self,
        _launch_path: &'a str,
    ) -> AppHostFuture<'a, Result<Option<IconPayload>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn launch_app<'a>(&'a self, _launch_path: &'a str) -> AppHostFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn save_app_category<'a>(
        &'a self,
        _launch_path: &'a str,
        _category: &'a str,
    ) -> AppHostFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One call observed by [`MemoryAppHostService`].
pub enum AppHostCall {
    /// `list_apps()`.
    ListApps,
    /// `app_icon(launch_path)`.
    AppIcon {
        /// Requested launch path.
        launch_path: String,
    },
    /// `launch_app(launch_path)`.
    LaunchApp {
        /// Requested launch path.
        launch_path: String,
    },
    /// `save_app_category(launch_path, category)`.
    SaveAppCategory {
        /// Target launch path.
        launch_path: String,
        /// New category value.
        category: String,
    },
}

#[derive(Debug, Default)]
struct MemoryAppHost {
    apps: Vec<ApplicationRecord>,
    icons: HashMap<String, IconPayload>,
    failures: HashMap<AppHostOperation, String>,
    launched: HashSet<String>,
    calls: Vec<AppHostCall>,
}

#[derive(Debug, Clone, Default)]
/// In-memory host keeping its catalog, icons, and call log in shared memory.
///
/// Clones share state, so a test can hand one clone to the code under test and keep another to
/// inspect recorded calls or inject failures.
pub struct MemoryAppHostService {
    inner: Rc<RefCell<MemoryAppHost>>,
}

impl MemoryAppHostService {
    /// Creates a host serving `apps`.
    pub fn with_apps(apps: Vec<ApplicationRecord>) -> Self {
        let host = Self::default();
        host.inner.borrow_mut().apps = apps;
        host
    }

    /// Registers an icon payload for `launch_path`.
    pub fn insert_icon(&self, launch_path: &str, payload: &str) {
        self.inner
            .borrow_mut()
            .icons
            .insert(launch_path.to_string(), payload.to_string());
    }

    /// Makes every subsequent call to `operation` fail with `message`.
    pub fn fail(&self, operation: AppHostOperation, message: &str) {
        self.inner
            .borrow_mut()
            .failures
            .insert(operation, message.to_string());
    }

    /// Clears an injected failure for `operation`.
    pub fn recover(&self, operation: AppHostOperation) {
        self.inner.borrow_mut().failures.remove(&operation);
    }

    /// Returns every call observed so far, in order.
    pub fn calls(&self) -> Vec<AppHostCall> {
        self.inner.borrow().calls.clone()
    }

    /// Returns the host's current view of the catalog.
    pub fn apps(&self) -> Vec<ApplicationRecord> {
        self.inner.borrow().apps.clone()
    }

    /// Returns whether `launch_path` has been launched successfully.
    pub fn was_launched(&self, launch_path: &str) -> bool {
        self.inner.borrow().launched.contains(launch_path)
    }

    fn record(&self, call: AppHostCall, operation: AppHostOperation) -> Result<(), String> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(call);
        match inner.failures.get(&operation) {
            Some(message) => Err(message.clone()),
            None => Ok(()),
        }
    }
}

impl AppHostService for MemoryAppHostService {
    fn list_apps<'a>(&'a self) -> AppHostFuture<'a, Result<Vec<ApplicationRecord>, String>> {
        Box::pin(async move {
            self.record(AppHostCall::ListApps, AppHostOperation::ListApps)?;
            Ok(self.apps())
        })
    }

    fn app_icon<'a>(
        &'a self,
        launch_path: &'a str,
    ) -> AppHostFuture<'a, Result<Option<IconPayload>, String>> {
        Box::pin(async move {
            self.record(
                AppHostCall::AppIcon {
                    launch_path: launch_path.to_string(),
                },
                AppHostOperation::AppIcon,
            )?;
            Ok(self.inner.borrow().icons.get(launch_path).cloned())
        })
    }

    fn launch_app<'a>(&'a self, launch_path: &'a str) -> AppHostFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.record(
                AppHostCall::LaunchApp {
                    launch_path: launch_path.to_string(),
                },
                AppHostOperation::LaunchApp,
            )?;
            self.inner
                .borrow_mut()
                .launched
                .insert(launch_path.to_string());
            Ok(())
        })
    }

    fn save_app_category<'a>(
        &'a self,
        launch_path: &'a str,
        category: &'a str,
    ) -> AppHostFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.record(
                AppHostCall::SaveAppCategory {
                    launch_path: launch_path.to_string(),
                    category: category.to_string(),
                },
                AppHostOperation::SaveAppCategory,
            )?;
            let mut inner = self.inner.borrow_mut();
            if let Some(app) = inner
                .apps
                .iter_mut()
                .find(|app| app.launch_path == launch_path)
            {
                app.category = category.to_string();
            }
            Ok(())
        })
    }
}
