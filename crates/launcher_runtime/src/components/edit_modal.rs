use leptos::*;

use crate::{
    components::use_launcher_runtime,
    model::{EditState, EditableField},
    reducer::LauncherAction,
};

#[component]
pub(super) fn EditAppModal() -> impl IntoView {
    let runtime = use_launcher_runtime();
    let state = runtime.state;
    // Keyed on the target and field only, so typing does not rebuild the form.
    let editing = create_memo(move |_| {
        state.with(|s| match &s.edit {
            EditState::Editing { launch_path, form } => Some((
                launch_path.clone(),
                form.field,
                form.display_name.clone(),
            )),
            _ => None,
        })
    });
    let draft = move || {
        state.with(|s| match &s.edit {
            EditState::Editing { form, .. } => form.value.clone(),
            _ => String::new(),
        })
    };

    view! {
        <Show when=move || editing.with(Option::is_some) fallback=|| ()>
            {move || {
                let Some((_, field, display_name)) = editing.get() else {
                    return ().into_view();
                };
                let input_id = format!("launcher-edit-{}", field_dom_suffix(field));

                view! {
                    <div class="launcher-modal-backdrop" on:mousedown=move |ev| ev.stop_propagation()>
                        <form
                            class="launcher-modal"
                            role="dialog"
                            aria-modal="true"
                            aria-label="Edit application"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                runtime.dispatch_action(LauncherAction::SaveEdit);
                            }
                        >
                            <h2 class="launcher-modal-title">{format!("Edit {display_name}")}</h2>
                            <label class="launcher-modal-field" for=input_id.clone()>
                                {field.label()}
                            </label>
                            <input
                                id=input_id
                                type="text"
                                autofocus=true
                                prop:value=draft
                                on:input=move |ev| {
                                    runtime.dispatch_action(LauncherAction::UpdateEditForm {
                                        field,
                                        value: event_target_value(&ev),
                                    });
                                }
                            />
                            <div class="launcher-modal-actions">
                                <button
                                    type="button"
                                    class="launcher-button"
                                    on:click=move |_| runtime.dispatch_action(LauncherAction::CancelEdit)
                                >
                                    "Cancel"
                                </button>
                                <button
                                    type="submit"
                                    class="launcher-button primary"
                                    disabled=move || draft().trim().is_empty()
                                >
                                    "Save"
                                </button>
                            </div>
                        </form>
                    </div>
                }
                    .into_view()
            }}
        </Show>
    }
}

fn field_dom_suffix(field: EditableField) -> &'static str {
    match field {
        EditableField::Category => "category",
    }
}
