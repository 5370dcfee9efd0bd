//! Launcher UI composition.

mod edit_modal;
mod grid;
mod menus;
mod notices;
mod toolbar;

use leptos::*;

use self::{
    edit_modal::EditAppModal,
    grid::AppGrid,
    menus::AppContextMenu,
    notices::{LoadingOverlay, NoticeStack},
    toolbar::Toolbar,
};
use crate::{model::EditState, reducer::LauncherAction};

pub use self::grid::AppIcon;
pub use crate::runtime_context::{use_launcher_runtime, LauncherProvider, LauncherRuntimeContext};

#[component]
/// Renders the launcher and routes window-level dismissal gestures.
///
/// Escape closes the context menu or cancels the edit form; a mousedown that reaches the window
/// (anything outside the menu) closes the menu.
pub fn LauncherShell() -> impl IntoView {
    let runtime = use_launcher_runtime();
    let state = runtime.state;

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        let action = match state.get_untracked().edit {
            EditState::MenuOpen { .. } => LauncherAction::CloseContextMenu,
            EditState::Editing { .. } => LauncherAction::CancelEdit,
            EditState::Idle => return,
        };
        ev.prevent_default();
        runtime.dispatch_action(action);
    });
    on_cleanup(move || escape_listener.remove());

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if matches!(state.get_untracked().edit, EditState::MenuOpen { .. }) {
            runtime.dispatch_action(LauncherAction::CloseContextMenu);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let host_strategy = runtime.host.with_value(|host| host.host_strategy_name());

    view! {
        <div
            id="launcher-shell-root"
            class="launcher-shell"
            data-host=host_strategy
            aria-busy=move || state.with(|s| s.overlay_visible).to_string()
        >
            <Toolbar />
            <AppGrid />
            <AppContextMenu />
            <EditAppModal />
            <NoticeStack />
            <LoadingOverlay />
        </div>
    }
}
