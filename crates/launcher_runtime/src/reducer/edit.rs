//! Reducer helpers for the context menu and the optimistic edit flow.

use crate::{
    model::{EditForm, EditState, LauncherState, NoticeKind, PendingEdit},
    reducer::{push_notice, reset_stale_category_filter, LauncherAction, ReducerError, RuntimeEffect},
};

fn invalid(action: &'static str, state: &LauncherState) -> ReducerError {
    ReducerError::InvalidTransition {
        action,
        state: state.edit.name(),
    }
}

pub(super) fn reduce_edit_action(
    state: &mut LauncherState,
    action: &LauncherAction,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<bool, ReducerError> {
    match action {
        LauncherAction::OpenContextMenu {
            launch_path,
            position,
        } => {
            if matches!(state.edit, EditState::Editing { .. }) {
                return Err(invalid("open-context-menu", state));
            }
            if state.app(launch_path).is_none() {
                return Err(ReducerError::AppNotFound(launch_path.clone()));
            }
            state.edit = EditState::MenuOpen {
                launch_path: launch_path.clone(),
                position: *position,
            };
        }
        LauncherAction::CloseContextMenu => {
            if matches!(state.edit, EditState::MenuOpen { .. }) {
                state.edit = EditState::Idle;
            }
        }
        LauncherAction::BeginEdit => {
            let EditState::MenuOpen { launch_path, .. } = &state.edit else {
                return Err(invalid("begin-edit", state));
            };
            let record = state
                .app(launch_path)
                .ok_or_else(|| ReducerError::AppNotFound(launch_path.clone()))?;
            let field = crate::model::EditableField::Category;
            let form = EditForm {
                display_name: record.display_name.clone(),
                field,
                value: field.read(record).to_string(),
            };
            state.edit = EditState::Editing {
                launch_path: launch_path.clone(),
                form,
            };
        }
        LauncherAction::UpdateEditForm { field, value } => {
            let EditState::Editing { form, .. } = &mut state.edit else {
                return Err(invalid("update-edit-form", state));
            };
            form.field = *field;
            form.value = value.clone();
        }
        LauncherAction::CancelEdit => {
            if !matches!(state.edit, EditState::Editing { .. }) {
                return Err(invalid("cancel-edit", state));
            }
            state.edit = EditState::Idle;
        }
        LauncherAction::SaveEdit => {
            let EditState::Editing { launch_path, form } = &state.edit else {
                return Err(invalid("save-edit", state));
            };
            let launch_path = launch_path.clone();
            let field = form.field;
            let value = form.value.trim().to_string();
            if value.is_empty() {
                return Err(ReducerError::EmptyFieldValue(field.label()));
            }

            let record = state
                .app_mut(&launch_path)
                .ok_or_else(|| ReducerError::AppNotFound(launch_path.clone()))?;
            let previous = field.read(record).to_string();
            if previous == value {
                state.edit = EditState::Idle;
                return Ok(true);
            }

            field.write(record, value.clone());
            reset_stale_category_filter(state);
            state.edit = EditState::Idle;
            state.pending_edits.insert(
                launch_path.clone(),
                PendingEdit {
                    field,
                    value: value.clone(),
                    previous: previous.clone(),
                },
            );
            effects.push(RuntimeEffect::PersistField {
                launch_path,
                field,
                value,
                previous,
            });
        }
        LauncherAction::FieldPersisted {
            launch_path, value, ..
        } => {
            finish_persisting(state, launch_path, value);
        }
        LauncherAction::FieldPersistFailed {
            launch_path,
            field,
            attempted,
            previous,
            error,
        } => {
            if let Some(record) = state.app_mut(launch_path) {
                if field.read(record) == attempted {
                    field.write(record, previous.clone());
                }
            }
            let message = format!(
                "Could not save {} for {}: {error}",
                field.label().to_lowercase(),
                state.display_name_for(launch_path)
            );
            push_notice(state, NoticeKind::Error, message, effects);
            finish_persisting(state, launch_path, attempted);
        }
        _ => return Ok(false),
    }

    Ok(true)
}

// A completion only settles the pending entry it was issued for; a newer save to the same
// record keeps waiting for its own reply.
fn finish_persisting(state: &mut LauncherState, launch_path: &str, value: &str) {
    let settled = state
        .pending_edits
        .get(launch_path)
        .is_some_and(|pending| pending.value == value);
    if settled {
        state.pending_edits.remove(launch_path);
    }
}
