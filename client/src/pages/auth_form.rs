//! Email + password form shared by the login and register pages.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::account::{self, Credentials};

use crate::state::session::SessionContext;

/// Which account endpoint the form submits to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Welcome back",
            Self::Register => "Create your account",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Login => "Sign in to continue.",
            Self::Register => "Start building your internship plan.",
        }
    }

    pub fn password_placeholder(self) -> &'static str {
        match self {
            Self::Login => "••••••••",
            Self::Register => "Create a secure password",
        }
    }

    pub fn submit_label(self, busy: bool) -> &'static str {
        match (self, busy) {
            (Self::Login, false) => "Sign in",
            (Self::Login, true) => "Signing in...",
            (Self::Register, false) => "Create account",
            (Self::Register, true) => "Creating account...",
        }
    }

    /// Link to the other form: `(prompt, link text, href)`.
    pub fn switch_link(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Login => ("New here? ", "Create an account", session::routes::REGISTER_PATH),
            Self::Register => ("Already have an account? ", "Sign in", session::routes::LOGIN_PATH),
        }
    }
}

#[component]
pub fn AuthForm(mode: AuthMode) -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        if let Err(message) = credentials.validate() {
            error.set(Some(message));
            return;
        }
        error.set(None);
        busy.set(true);

        let ctx = ctx.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = match mode {
                AuthMode::Login => account::login(ctx.api(), ctx.profiles(), &credentials).await,
                AuthMode::Register => account::register(ctx.api(), ctx.profiles(), &credentials).await,
            };
            busy.set(false);
            match result {
                Ok(route) => navigate(route.path(), NavigateOptions::default()),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let (prompt, link_text, link_href) = mode.switch_link();

    view! {
        <div class="auth-card">
            <h1>{mode.title()}</h1>
            <p class="auth-card__subtitle">{mode.subtitle()}</p>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">"Email"</label>
                <input
                    class="auth-form__input"
                    type="email"
                    placeholder="you@school.edu"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label class="auth-form__label">"Password"</label>
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder=mode.password_placeholder()
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || mode.submit_label(busy.get())}
                </button>
            </form>
            <p class="auth-card__switch">
                {prompt}
                <a href=link_href>{link_text}</a>
            </p>
        </div>
    }
}
