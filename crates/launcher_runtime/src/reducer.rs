//! Reducer actions, side-effect intents, and transition logic for the launcher runtime.

mod edit;

use launcher_host::ApplicationRecord;
use leptos::logging;
use thiserror::Error;

use crate::{
    catalog,
    model::{
        EditState, EditableField, LauncherState, MenuPosition, Notice, NoticeKind, ThemeId,
        ALL_CATEGORIES,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_launcher`] to mutate [`LauncherState`].
pub enum LauncherAction {
    /// Hydrate the catalog from the host's enumeration. Accepted once per process.
    CatalogLoaded {
        /// Records as enumerated by the host.
        apps: Vec<ApplicationRecord>,
    },
    /// The host enumeration failed; continue with an empty catalog.
    CatalogLoadFailed {
        /// Host diagnostic text.
        error: String,
    },
    /// Hide the loading overlay once the catalog is loaded.
    DismissLoadingOverlay,
    /// Replace the search term.
    SetSearchTerm {
        /// Raw search input.
        term: String,
    },
    /// Replace the category filter (`"All"` disables it).
    SetCategoryFilter {
        /// Category to filter by.
        category: String,
    },
    /// Apply the theme read from durable storage at boot.
    HydrateTheme {
        /// Stored theme.
        theme: ThemeId,
    },
    /// Switch to a theme chosen by the user.
    SetTheme {
        /// Selected theme.
        theme: ThemeId,
    },
    /// Open the context menu for one record, closing any menu already open.
    OpenContextMenu {
        /// Target record.
        launch_path: String,
        /// Viewport coordinates for menu placement.
        position: MenuPosition,
    },
    /// Close the open context menu.
    CloseContextMenu,
    /// Open the edit form for the context menu's record.
    BeginEdit,
    /// Update the in-progress edit form.
    UpdateEditForm {
        /// Field being edited.
        field: EditableField,
        /// New raw input.
        value: String,
    },
    /// Discard the edit form.
    CancelEdit,
    /// Apply the edit form optimistically and persist it through the host.
    SaveEdit,
    /// The host confirmed a persisted field.
    FieldPersisted {
        /// Edited record.
        launch_path: String,
        /// Persisted field.
        field: EditableField,
        /// Value the host stored.
        value: String,
    },
    /// The host rejected a persisted field; revert and notify.
    FieldPersistFailed {
        /// Edited record.
        launch_path: String,
        /// Field whose write failed.
        field: EditableField,
        /// Value that failed to persist.
        attempted: String,
        /// Value before the optimistic update.
        previous: String,
        /// Host diagnostic text.
        error: String,
    },
    /// Launch a record through the host.
    LaunchApp {
        /// Record to launch.
        launch_path: String,
    },
    /// The host failed to launch a record.
    LaunchFailed {
        /// Record that failed to launch.
        launch_path: String,
        /// Host diagnostic text.
        error: String,
    },
    /// Show a toast notice.
    PushNotice {
        /// Notice severity.
        kind: NoticeKind,
        /// Notice text.
        message: String,
    },
    /// Remove a toast notice.
    DismissNotice {
        /// Notice id.
        id: u64,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by the reducer for the host layer to execute.
pub enum RuntimeEffect {
    /// Reflect a theme on the visual surface.
    ApplyTheme(ThemeId),
    /// Write a theme to durable storage.
    PersistTheme(ThemeId),
    /// Persist an optimistically applied field through the host.
    PersistField {
        /// Edited record.
        launch_path: String,
        /// Edited field.
        field: EditableField,
        /// Value to persist.
        value: String,
        /// Value before the optimistic update, used to revert on failure.
        previous: String,
    },
    /// Start the application behind `launch_path`.
    LaunchApp {
        /// Record to launch.
        launch_path: String,
    },
    /// Dismiss notice `id` after its lifetime elapses.
    ScheduleNoticeDismiss {
        /// Notice id.
        id: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Reducer transition failures. State is left untouched when one is returned.
pub enum ReducerError {
    /// No record with this launch path is in the catalog.
    #[error("application not found: {0}")]
    AppNotFound(String),
    /// The action is not valid in the current context-action state.
    #[error("`{action}` is not valid while {state}")]
    InvalidTransition {
        /// Rejected action.
        action: &'static str,
        /// Context-action state at the time.
        state: &'static str,
    },
    /// The catalog has already been hydrated this session.
    #[error("catalog already loaded")]
    CatalogAlreadyLoaded,
    /// An edited field was blank after trimming.
    #[error("{0} cannot be empty")]
    EmptyFieldValue(&'static str),
}

/// Applies `action` to `state` and returns the side effects to run.
///
/// # Errors
///
/// Returns [`ReducerError`] when the action is not valid for the current state. Callers are
/// expected to discard partial mutations on error.
pub fn reduce_launcher(
    state: &mut LauncherState,
    action: LauncherAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();

    if edit::reduce_edit_action(state, &action, &mut effects)? {
        return Ok(effects);
    }

    match action {
        LauncherAction::CatalogLoaded { apps } => {
            if state.catalog_loaded {
                return Err(ReducerError::CatalogAlreadyLoaded);
            }
            let (apps, dropped) = catalog::dedupe_by_launch_path(apps);
            for launch_path in dropped {
                logging::warn!("dropping duplicate catalog entry for `{launch_path}`");
            }
            state.apps = apps;
            state.catalog_loaded = true;
            reset_stale_category_filter(state);
        }
        LauncherAction::CatalogLoadFailed { .. } => {
            if state.catalog_loaded {
                return Err(ReducerError::CatalogAlreadyLoaded);
            }
            state.apps.clear();
            state.catalog_loaded = true;
        }
        LauncherAction::DismissLoadingOverlay => {
            if state.catalog_loaded {
                state.overlay_visible = false;
            }
        }
        LauncherAction::SetSearchTerm { term } => {
            state.search_term = term;
        }
        LauncherAction::SetCategoryFilter { category } => {
            state.category_filter = category;
        }
        LauncherAction::HydrateTheme { theme } => {
            state.theme = theme;
            effects.push(RuntimeEffect::ApplyTheme(theme));
        }
        LauncherAction::SetTheme { theme } => {
            if state.theme != theme {
                state.theme = theme;
                effects.push(RuntimeEffect::ApplyTheme(theme));
                effects.push(RuntimeEffect::PersistTheme(theme));
            }
        }
        LauncherAction::LaunchApp { launch_path } => {
            if state.app(&launch_path).is_none() {
                return Err(ReducerError::AppNotFound(launch_path));
            }
            if matches!(state.edit, EditState::MenuOpen { .. }) {
                state.edit = EditState::Idle;
            }
            effects.push(RuntimeEffect::LaunchApp { launch_path });
        }
        LauncherAction::LaunchFailed { launch_path, error } => {
            let message = format!(
                "Could not launch {}: {error}",
                state.display_name_for(&launch_path)
            );
            push_notice(state, NoticeKind::Error, message, &mut effects);
        }
        LauncherAction::PushNotice { kind, message } => {
            push_notice(state, kind, message, &mut effects);
        }
        LauncherAction::DismissNotice { id } => {
            state.notices.retain(|notice| notice.id != id);
        }
        LauncherAction::OpenContextMenu { .. }
        | LauncherAction::CloseContextMenu
        | LauncherAction::BeginEdit
        | LauncherAction::UpdateEditForm { .. }
        | LauncherAction::CancelEdit
        | LauncherAction::SaveEdit
        | LauncherAction::FieldPersisted { .. }
        | LauncherAction::FieldPersistFailed { .. } => {}
    }

    Ok(effects)
}

pub(crate) fn push_notice(
    state: &mut LauncherState,
    kind: NoticeKind,
    message: String,
    effects: &mut Vec<RuntimeEffect>,
) {
    let id = state.next_notice_id;
    state.next_notice_id += 1;
    state.notices.push(Notice { id, kind, message });
    effects.push(RuntimeEffect::ScheduleNoticeDismiss { id });
}

/// Falls back to the "All" filter when no record carries the active category anymore.
pub(crate) fn reset_stale_category_filter(state: &mut LauncherState) {
    if state.category_filter != ALL_CATEGORIES
        && !state
            .apps
            .iter()
            .any(|app| app.category == state.category_filter)
    {
        state.category_filter = ALL_CATEGORIES.to_string();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn loaded_state() -> LauncherState {
        let mut state = LauncherState::default();
        reduce_launcher(
            &mut state,
            LauncherAction::CatalogLoaded {
                apps: vec![
                    ApplicationRecord::new("0", "Foo", "/Apps/Foo", "Tools"),
                    ApplicationRecord::new("1", "Bar", "/Apps/Bar", "Media"),
                ],
            },
        )
        .expect("load catalog");
        state
    }

    #[test]
    fn catalog_hydrates_once_and_drops_duplicate_paths() {
        let mut state = LauncherState::default();
        reduce_launcher(
            &mut state,
            LauncherAction::CatalogLoaded {
                apps: vec![
                    ApplicationRecord::new("0", "Foo", "/Apps/Foo", "Tools"),
                    ApplicationRecord::new("1", "Foo again", "/Apps/Foo", "Games"),
                ],
            },
        )
        .expect("load");

        assert!(state.catalog_loaded);
        assert_eq!(
            state.apps,
            vec![ApplicationRecord::new("0", "Foo", "/Apps/Foo", "Tools")]
        );
        assert_eq!(
            reduce_launcher(&mut state, LauncherAction::CatalogLoaded { apps: vec![] }),
            Err(ReducerError::CatalogAlreadyLoaded)
        );
    }

    #[test]
    fn catalog_failure_leaves_an_empty_interactive_catalog_without_notice() {
        let mut state = LauncherState::default();
        let effects = reduce_launcher(
            &mut state,
            LauncherAction::CatalogLoadFailed {
                error: "host unavailable".to_string(),
            },
        )
        .expect("load failed");

        assert!(effects.is_empty());
        assert!(state.catalog_loaded);
        assert!(state.apps.is_empty());
        assert!(state.notices.is_empty());
    }

    #[test]
    fn overlay_dismissal_waits_for_catalog() {
        let mut state = LauncherState::default();
        reduce_launcher(&mut state, LauncherAction::DismissLoadingOverlay).expect("dismiss");
        assert!(state.overlay_visible);

        let mut state = loaded_state();
        reduce_launcher(&mut state, LauncherAction::DismissLoadingOverlay).expect("dismiss");
        assert!(!state.overlay_visible);
    }

    #[test]
    fn set_theme_applies_and_persists_only_on_change() {
        let mut state = LauncherState::default();

        let effects =
            reduce_launcher(&mut state, LauncherAction::SetTheme { theme: ThemeId::Pink })
                .expect("set theme");
        assert_eq!(state.theme, ThemeId::Pink);
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::ApplyTheme(ThemeId::Pink),
                RuntimeEffect::PersistTheme(ThemeId::Pink),
            ]
        );

        let effects =
            reduce_launcher(&mut state, LauncherAction::SetTheme { theme: ThemeId::Pink })
                .expect("same theme");
        assert!(effects.is_empty());
    }

    #[test]
    fn hydrated_theme_is_applied_but_not_written_back() {
        let mut state = LauncherState::default();
        let effects = reduce_launcher(
            &mut state,
            LauncherAction::HydrateTheme {
                theme: ThemeId::Ocean,
            },
        )
        .expect("hydrate theme");

        assert_eq!(state.theme, ThemeId::Ocean);
        assert_eq!(effects, vec![RuntimeEffect::ApplyTheme(ThemeId::Ocean)]);
    }

    #[test]
    fn launch_closes_menu_and_emits_host_effect() {
        let mut state = loaded_state();
        reduce_launcher(
            &mut state,
            LauncherAction::OpenContextMenu {
                launch_path: "/Apps/Bar".to_string(),
                position: MenuPosition { x: 4, y: 8 },
            },
        )
        .expect("open menu");

        let effects = reduce_launcher(
            &mut state,
            LauncherAction::LaunchApp {
                launch_path: "/Apps/Bar".to_string(),
            },
        )
        .expect("launch");

        assert_eq!(state.edit, EditState::Idle);
        assert_eq!(
            effects,
            vec![RuntimeEffect::LaunchApp {
                launch_path: "/Apps/Bar".to_string()
            }]
        );
        assert_eq!(
            reduce_launcher(
                &mut state,
                LauncherAction::LaunchApp {
                    launch_path: "/Apps/Missing".to_string()
                }
            ),
            Err(ReducerError::AppNotFound("/Apps/Missing".to_string()))
        );
    }

    #[test]
    fn launch_failure_surfaces_a_notice_that_expires() {
        let mut state = loaded_state();
        let effects = reduce_launcher(
            &mut state,
            LauncherAction::LaunchFailed {
                launch_path: "/Apps/Foo".to_string(),
                error: "permission denied".to_string(),
            },
        )
        .expect("launch failed");

        assert_eq!(
            state.notices,
            vec![Notice {
                id: 1,
                kind: NoticeKind::Error,
                message: "Could not launch Foo: permission denied".to_string(),
            }]
        );
        assert_eq!(effects, vec![RuntimeEffect::ScheduleNoticeDismiss { id: 1 }]);

        reduce_launcher(&mut state, LauncherAction::DismissNotice { id: 1 }).expect("dismiss");
        assert!(state.notices.is_empty());
    }

    #[test]
    fn notice_ids_increase_monotonically() {
        let mut state = LauncherState::default();
        for message in ["one", "two"] {
            reduce_launcher(
                &mut state,
                LauncherAction::PushNotice {
                    kind: NoticeKind::Info,
                    message: message.to_string(),
                },
            )
            .expect("push notice");
        }
        reduce_launcher(&mut state, LauncherAction::DismissNotice { id: 1 }).expect("dismiss");
        reduce_launcher(
            &mut state,
            LauncherAction::PushNotice {
                kind: NoticeKind::Info,
                message: "three".to_string(),
            },
        )
        .expect("push notice");

        let ids: Vec<u64> = state.notices.iter().map(|notice| notice.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn filter_parameters_drive_the_derived_list() {
        let mut state = loaded_state();
        reduce_launcher(
            &mut state,
            LauncherAction::SetCategoryFilter {
                category: "Media".to_string(),
            },
        )
        .expect("set filter");
        assert_eq!(state.filtered_apps().len(), 1);

        reduce_launcher(
            &mut state,
            LauncherAction::SetSearchTerm {
                term: "foo".to_string(),
            },
        )
        .expect("set term");
        assert!(state.filtered_apps().is_empty());
    }
}
