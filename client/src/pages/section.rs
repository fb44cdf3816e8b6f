//! Placeholder screens for the sidebar sections beyond the dashboard.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::sidebar::{NAV_ITEMS, NavItem, Sidebar};

/// Sidebar entry whose href matches `path`, if any.
pub fn section_for(path: &str) -> Option<NavItem> {
    let path = session::routes::normalize_path(path);
    NAV_ITEMS.into_iter().find(|item| item.href == path)
}

#[component]
pub fn SectionPage() -> impl IntoView {
    let pathname = use_location().pathname;
    let section = Memo::new(move |_| section_for(&pathname.get()));

    view! {
        <Show
            when=move || section.get().is_some()
            fallback=|| "Page not found."
        >
            <div class="layout">
                <Sidebar/>
                <main class="layout__main">
                    <h1>{move || section.get().map(|item| item.label).unwrap_or_default()}</h1>
                    <p class="section__empty">"This section is coming soon."</p>
                </main>
            </div>
        </Show>
    }
}
