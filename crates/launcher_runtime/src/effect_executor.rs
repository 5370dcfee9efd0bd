//! Runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::LauncherRuntimeContext;

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: LauncherRuntimeContext) {
    // Clear the queue before running so effects that dispatch synchronously enqueue a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            runtime.host.get_value().run_runtime_effect(runtime, effect);
        }
    });
}
