//! Navigation sidebar with the signed-in student and a logout action.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{SessionContext, profile_label, profile_subtitle};

/// A sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 9] = [
    NavItem { label: "Dashboard", href: "/dashboard" },
    NavItem { label: "Timeline & Strategy", href: "/timeline" },
    NavItem { label: "Coding Skills", href: "/skills" },
    NavItem { label: "Projects", href: "/projects" },
    NavItem { label: "Resume", href: "/resume" },
    NavItem { label: "Applications", href: "/applications" },
    NavItem { label: "Interview Prep", href: "/interview-prep" },
    NavItem { label: "Leetcode", href: "/leetcode" },
    NavItem { label: "Opportunities", href: "/opportunities" },
];

/// CSS class for a nav link given the current pathname.
pub fn nav_item_class(current: &str, href: &str) -> &'static str {
    if session::routes::normalize_path(current) == href {
        "sidebar__link sidebar__link--active"
    } else {
        "sidebar__link"
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let profile = ctx.profile;
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let on_logout = move |_| {
        let next = session::account::logout(ctx.api(), ctx.profiles());
        navigate(next.path(), NavigateOptions::default());
    };

    let links = NAV_ITEMS
        .into_iter()
        .map(|item| {
            let class = move || nav_item_class(&pathname.get(), item.href);
            view! {
                <a href=item.href class=class>{item.label}</a>
            }
        })
        .collect_view();

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"InternshipRoute"</div>
            <div class="sidebar__section">"Preparation"</div>
            <div class="sidebar__links">{links}</div>
            <div class="sidebar__footer">
                <div class="sidebar__user">
                    <p class="sidebar__user-name">{move || profile_label(profile.get().as_ref())}</p>
                    <p class="sidebar__user-meta">{move || profile_subtitle(profile.get().as_ref())}</p>
                </div>
                <button class="sidebar__logout" on:click=on_logout aria-label="Log out">
                    "Log out"
                </button>
            </div>
        </nav>
    }
}
