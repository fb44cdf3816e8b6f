//! Dashboard page: the signed-in landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only rendered once the `AuthGuard` has settled, so the profile signal is
//! already populated from `/auth/me`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use session::UserProfile;
use session::profile::SkillLevel;

use crate::components::sidebar::Sidebar;
use crate::state::session::SessionContext;

/// Headline greeting for the dashboard.
pub fn greeting(profile: Option<&UserProfile>) -> String {
    match profile {
        Some(user) => format!("Welcome back, {}", user.display_name()),
        None => "Welcome back".to_owned(),
    }
}

/// Short status line describing where the student is in their plan.
pub fn plan_summary(profile: Option<&UserProfile>) -> &'static str {
    let level = profile
        .and_then(|user| user.coding_skill_level.as_deref())
        .and_then(|raw| raw.parse::<SkillLevel>().ok())
        .unwrap_or_default();
    match level {
        SkillLevel::Advanced => "Focus on applications and interview prep.",
        SkillLevel::Intermediate => "Build projects and keep up daily practice.",
        SkillLevel::Beginner => "Start with the fundamentals and a first project.",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let profile = expect_context::<SessionContext>().profile;

    view! {
        <div class="layout">
            <Sidebar/>
            <main class="layout__main">
                <h1>{move || greeting(profile.get().as_ref())}</h1>
                <p class="dashboard__summary">{move || plan_summary(profile.get().as_ref())}</p>
            </main>
        </div>
    }
}
