use launcher_host::ApplicationRecord;
use leptos::*;

use crate::{
    components::use_launcher_runtime,
    host::LauncherHostContext,
    icon_cache::{resolve_for_view, ViewLiveness},
    model::MenuPosition,
    reducer::LauncherAction,
};

#[component]
pub(super) fn AppGrid() -> impl IntoView {
    let runtime = use_launcher_runtime();
    let state = runtime.state;
    let visible = create_memo(move |_| state.with(|s| s.filtered_apps()));

    view! {
        <section class="launcher-grid" role="list" aria-label="Applications">
            <For
                each=move || visible.get()
                key=|app| app.launch_path.clone()
                children=move |app| view! { <AppTile app=app /> }
            />
            <Show
                when=move || state.with(|s| s.catalog_loaded) && visible.with(Vec::is_empty)
                fallback=|| ()
            >
                <p class="launcher-empty">"No applications match."</p>
            </Show>
        </section>
    }
}

#[component]
fn AppTile(app: ApplicationRecord) -> impl IntoView {
    let runtime = use_launcher_runtime();
    let state = runtime.state;
    let launch_path = store_value(app.launch_path.clone());
    let category = move || {
        launch_path.with_value(|path| {
            state.with(|s| s.app(path).map(|record| record.category.clone()))
        })
    };
    let persisting = move || launch_path.with_value(|path| state.with(|s| s.is_persisting(path)));
    let launch = move || {
        let action = runtime
            .host
            .with_value(|host| host.launch_action(launch_path.get_value()));
        runtime.dispatch_action(action);
    };

    view! {
        <div
            class="launcher-tile"
            class:launcher-tile-saving=persisting
            aria-busy=move || persisting().to_string()
            role="listitem"
            tabindex="0"
            title=app.display_name.clone()
            on:click=move |_| launch()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    launch();
                }
            }
            on:contextmenu=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                runtime.dispatch_action(LauncherAction::OpenContextMenu {
                    launch_path: launch_path.get_value(),
                    position: MenuPosition {
                        x: ev.client_x(),
                        y: ev.client_y(),
                    },
                });
            }
        >
            <AppIcon launch_path=app.launch_path.clone() display_name=app.display_name.clone() />
            <span class="launcher-tile-name">{app.display_name.clone()}</span>
            <span class="launcher-tile-category">{category}</span>
        </div>
    }
}

#[component]
/// Icon for one application, with a lettered placeholder until (or unless) the host supplies one.
pub fn AppIcon(launch_path: String, display_name: String) -> impl IntoView {
    let runtime = use_launcher_runtime();
    let icons = runtime.host.with_value(LauncherHostContext::icon_cache);
    let cached = icons.cached(&launch_path);
    let icon = create_rw_signal(cached.clone().flatten());

    if cached.is_none() {
        let liveness = ViewLiveness::default();
        let guard = liveness.clone();
        on_cleanup(move || guard.mark_dropped());
        spawn_local(async move {
            resolve_for_view(&icons, &launch_path, &liveness, |payload| icon.set(payload)).await;
        });
    }

    let initial = display_name
        .chars()
        .next()
        .map(|letter| letter.to_uppercase().to_string())
        .unwrap_or_default();

    view! {
        <span class="launcher-icon" aria-hidden="true">
            {move || match icon.get() {
                Some(src) => view! { <img src=src alt="" draggable="false" /> }.into_view(),
                None => {
                    view! { <span class="launcher-icon-placeholder">{initial.clone()}</span> }
                        .into_view()
                }
            }}
        </span>
    }
}
