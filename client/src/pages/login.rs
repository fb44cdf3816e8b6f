//! Login page: email + password sign-in.

use leptos::prelude::*;

use crate::pages::auth_form::{AuthForm, AuthMode};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <AuthForm mode=AuthMode::Login/>
        </div>
    }
}
