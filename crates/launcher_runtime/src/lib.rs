//! Client view-state layer for the application launcher.
//!
//! The catalog, icon cache, context-action controller, theme preference, and notices are held
//! in one [`LauncherState`] driven by [`reduce_launcher`]. Host round trips run as
//! [`RuntimeEffect`] values executed by the provider; their outcomes come back as actions.

pub mod catalog;
pub mod components;
mod effect_executor;
mod host;
pub mod icon_cache;
pub mod model;
pub mod orchestration;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod theme;

pub use components::{
    use_launcher_runtime, AppIcon, LauncherProvider, LauncherRuntimeContext, LauncherShell,
};
pub use host::LauncherHostContext;
pub use icon_cache::{IconCache, ViewLiveness};
pub use model::*;
pub use persistence::{load_theme, persist_theme, THEME_PREF_KEY};
pub use reducer::{reduce_launcher, LauncherAction, ReducerError, RuntimeEffect};
pub use theme::{DocumentThemeSurface, MemoryThemeSurface, ThemeSurface};
