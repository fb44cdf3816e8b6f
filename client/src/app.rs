//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};
use session::ApiConfig;

use crate::components::auth_guard::AuthGuard;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, onboarding::OnboardingPage, register::RegisterPage,
    section::SectionPage,
};
use crate::state::session::SessionContext;

/// Root application component.
///
/// Provides the session context and wraps every route in the auth guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SessionContext::new(ApiConfig::from_build_env()));

    view! {
        <Title text="InternshipRoute"/>

        <Router>
            <AuthGuard>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("onboarding") view=OnboardingPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route path=ParamSegment("section") view=SectionPage/>
                </Routes>
            </AuthGuard>
        </Router>
    }
}
