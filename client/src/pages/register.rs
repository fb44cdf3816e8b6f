//! Registration page.

use leptos::prelude::*;

use crate::pages::auth_form::{AuthForm, AuthMode};

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <AuthForm mode=AuthMode::Register/>
        </div>
    }
}
