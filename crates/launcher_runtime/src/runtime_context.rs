//! Runtime provider and context wiring for the launcher.
//!
//! This module owns the reducer container, the effect queue, and boot wiring. UI composition
//! stays in [`crate::components`].

use launcher_host::HostServices;
use leptos::*;

use crate::{
    effect_executor,
    host::LauncherHostContext,
    model::LauncherState,
    reducer::{reduce_launcher, LauncherAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading launcher state and dispatching [`LauncherAction`] values.
pub struct LauncherRuntimeContext {
    /// Host services and runtime-owned resources used to execute effects.
    pub host: StoredValue<LauncherHostContext>,
    /// Reactive launcher state.
    pub state: RwSignal<LauncherState>,
    /// Effects emitted by the reducer and not yet executed.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<LauncherAction>,
}

impl LauncherRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: LauncherAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`LauncherRuntimeContext`] to descendant components and starts boot hydration.
pub fn LauncherProvider(
    /// Host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(LauncherHostContext::new(host_services));
    let state = create_rw_signal(LauncherState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: LauncherAction| {
        let mut next = state.get_untracked();
        match reduce_launcher(&mut next, action) {
            Ok(new_effects) => {
                if next != state.get_untracked() {
                    state.set(next);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("launcher reducer error: {err}"),
        }
    });

    let runtime = LauncherRuntimeContext {
        host,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);

    host.get_value().install_boot_hydration(dispatch);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`LauncherRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`LauncherProvider`].
pub fn use_launcher_runtime() -> LauncherRuntimeContext {
    use_context::<LauncherRuntimeContext>().expect("LauncherRuntimeContext not provided")
}
