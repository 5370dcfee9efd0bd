use leptos::*;

use crate::{
    components::use_launcher_runtime,
    model::ThemeId,
    reducer::LauncherAction,
};

#[component]
pub(super) fn Toolbar() -> impl IntoView {
    let runtime = use_launcher_runtime();
    let state = runtime.state;
    let categories = create_memo(move |_| state.with(|s| s.categories()));

    view! {
        <header class="launcher-toolbar">
            <input
                type="search"
                class="launcher-search"
                placeholder="Search applications"
                aria-label="Search applications"
                prop:value=move || state.with(|s| s.search_term.clone())
                on:input=move |ev| {
                    runtime.dispatch_action(LauncherAction::SetSearchTerm {
                        term: event_target_value(&ev),
                    });
                }
            />
            <select
                class="launcher-category-filter"
                aria-label="Filter by category"
                prop:value=move || state.with(|s| s.category_filter.clone())
                on:change=move |ev| {
                    runtime.dispatch_action(LauncherAction::SetCategoryFilter {
                        category: event_target_value(&ev),
                    });
                }
            >
                <For
                    each=move || categories.get()
                    key=|category| category.clone()
                    children=move |category| {
                        let option_value = category.clone();
                        view! {
                            <option
                                value=category.clone()
                                selected=move || state.with(|s| s.category_filter == option_value)
                            >
                                {category}
                            </option>
                        }
                    }
                />
            </select>
            <ThemeSwitcher />
        </header>
    }
}

#[component]
fn ThemeSwitcher() -> impl IntoView {
    let runtime = use_launcher_runtime();
    let state = runtime.state;

    view! {
        <div class="launcher-theme-switcher" role="radiogroup" aria-label="Theme">
            {ThemeId::ALL
                .into_iter()
                .map(|theme| {
                    let is_active = move || state.with(|s| s.theme == theme);
                    view! {
                        <button
                            type="button"
                            role="radio"
                            class="launcher-theme-swatch"
                            class:active=is_active
                            data-theme-option=theme.as_str()
                            title=theme.label()
                            aria-label=theme.label()
                            aria-checked=move || is_active().to_string()
                            on:click=move |_| {
                                runtime.dispatch_action(LauncherAction::SetTheme { theme });
                            }
                        ></button>
                    }
                })
                .collect_view()}
        </div>
    }
}
