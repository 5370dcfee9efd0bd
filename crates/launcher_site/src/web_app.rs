use launcher_host_web::build_host_services;
use launcher_runtime::{LauncherProvider, LauncherShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn LauncherApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Launcher" />
        <Meta name="description" content="Installed applications, searchable by name and category." />

        <main class="site-root">
            <LauncherEntry />
        </main>
    }
}

#[component]
pub fn LauncherEntry() -> impl IntoView {
    view! {
        <LauncherProvider host_services=build_host_services()>
            <LauncherShell />
        </LauncherProvider>
    }
}
