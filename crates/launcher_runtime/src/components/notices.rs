use leptos::*;

use crate::{components::use_launcher_runtime, model::NoticeKind, reducer::LauncherAction};

#[component]
pub(super) fn NoticeStack() -> impl IntoView {
    let runtime = use_launcher_runtime();
    let state = runtime.state;

    view! {
        <div class="launcher-notices" role="status" aria-live="polite">
            <For
                each=move || state.with(|s| s.notices.clone())
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let kind = match notice.kind {
                        NoticeKind::Info => "info",
                        NoticeKind::Error => "error",
                    };
                    view! {
                        <div class="launcher-notice" data-kind=kind>
                            <span class="launcher-notice-message">{notice.message}</span>
                            <button
                                type="button"
                                class="launcher-notice-dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| {
                                    runtime.dispatch_action(LauncherAction::DismissNotice { id });
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
pub(super) fn LoadingOverlay() -> impl IntoView {
    let state = use_launcher_runtime().state;

    view! {
        <Show when=move || state.with(|s| s.overlay_visible) fallback=|| ()>
            <div class="launcher-loading-overlay" role="progressbar" aria-label="Loading applications">
                <div class="launcher-spinner" aria-hidden="true"></div>
                <p>"Loading applications..."</p>
            </div>
        </Show>
    }
}
