//! One-time onboarding: skill level and graduation date.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `AuthGuard` pins users with `onboarding_completed = false` to this
//! route. Submitting posts `/user/onboarding`, refreshes the cached profile
//! and moves on to the dashboard, where the guard re-checks with the server.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::account::{self, OnboardingForm};
use session::profile::SkillLevel;

use crate::state::session::SessionContext;

/// Build the form from raw `<select>`/`<input type="month">` values.
pub(crate) fn form_from_inputs(level: &str, graduation: &str) -> OnboardingForm {
    OnboardingForm {
        experience_level: level.parse().unwrap_or_default(),
        graduation_date: Some(graduation.to_owned()),
    }
}

pub(crate) fn submit_label(busy: bool) -> &'static str {
    if busy { "Saving..." } else { "Finish onboarding" }
}

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let level = RwSignal::new(SkillLevel::default().as_str().to_owned());
    let graduation = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = form_from_inputs(&level.get_untracked(), &graduation.get_untracked());
        if let Err(message) = form.validate() {
            error.set(Some(message));
            return;
        }
        error.set(None);
        busy.set(true);

        let ctx = ctx.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = account::complete_onboarding(ctx.api(), ctx.profiles(), &form).await;
            busy.set(false);
            match result {
                Ok(route) => navigate(route.path(), NavigateOptions::default()),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let options = SkillLevel::ALL
        .into_iter()
        .map(|skill| view! { <option value=skill.as_str()>{skill.as_str()}</option> })
        .collect_view();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Let's personalize your plan"</h1>
                <p class="auth-card__subtitle">
                    "Tell us your current level and goals so we can build your dashboard."
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">"Experience level"</label>
                    <select
                        class="auth-form__input"
                        prop:value=move || level.get()
                        on:change=move |ev| level.set(event_target_value(&ev))
                    >
                        {options}
                    </select>
                    <label class="auth-form__label">"Graduation date"</label>
                    <input
                        class="auth-form__input"
                        type="month"
                        prop:value=move || graduation.get()
                        on:input=move |ev| graduation.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
            </div>
        </div>
    }
}
