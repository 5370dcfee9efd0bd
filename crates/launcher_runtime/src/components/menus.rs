use leptos::*;

use crate::{
    components::use_launcher_runtime,
    model::{EditState, MenuPosition},
    reducer::LauncherAction,
};

#[component]
pub(super) fn AppContextMenu() -> impl IntoView {
    let runtime = use_launcher_runtime();
    let state = runtime.state;
    let can_edit = runtime
        .host
        .with_value(|host| host.capabilities().category_persistence.is_available());
    let open_menu = create_memo(move |_| {
        state.with(|s| match &s.edit {
            EditState::MenuOpen {
                launch_path,
                position,
            } => Some((launch_path.clone(), *position)),
            _ => None,
        })
    });

    view! {
        <Show when=move || open_menu.with(Option::is_some) fallback=|| ()>
            {move || {
                let Some((launch_path, MenuPosition { x, y })) = open_menu.get() else {
                    return ().into_view();
                };
                let menu_style = format!("left:{x}px;top:{y}px;");

                view! {
                    <div
                        id="launcher-context-menu"
                        class="launcher-context-menu"
                        role="menu"
                        aria-label="Application actions"
                        style=menu_style
                        on:mousedown=move |ev| ev.stop_propagation()
                        on:contextmenu=move |ev| ev.prevent_default()
                    >
                        <button
                            id="launcher-context-menu-item-open"
                            role="menuitem"
                            class="launcher-menu-item"
                            on:click=move |_| {
                                let action = runtime
                                    .host
                                    .with_value(|host| host.launch_action(launch_path.clone()));
                                runtime.dispatch_action(action);
                                runtime.dispatch_action(LauncherAction::CloseContextMenu);
                            }
                        >
                            "Open"
                        </button>
                        {can_edit.then(|| view! {
                            <button
                                id="launcher-context-menu-item-edit"
                                role="menuitem"
                                class="launcher-menu-item"
                                on:click=move |_| runtime.dispatch_action(LauncherAction::BeginEdit)
                            >
                                "Edit"
                            </button>
                        })}
                    </div>
                }
                    .into_view()
            }}
        </Show>
    }
}
