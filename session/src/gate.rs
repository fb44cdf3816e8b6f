//! Per-navigation session/onboarding gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `AuthGuard` component runs [`SessionGate::check`] on every route
//! change and renders nothing until the result is [`GateState::Checked`].
//! The gate is the only place that turns token presence plus the server's
//! onboarding flag into a redirect.
//!
//! DESIGN
//! ======
//! Redirect decisions use the freshly fetched `/auth/me` profile only; the
//! profile cache is written here and never read. Each check carries a
//! generation number, and a check whose generation is no longer the latest
//! when its fetch resolves is dropped without touching storage or issuing a
//! redirect, so the outcome always reflects the most recent route.
//!
//! A fetch that never resolves leaves the caller in `Unchecked`; no timeout
//! is applied.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::api::{ApiClient, Transport};
use crate::profile::{ProfileCache, UserProfile};
use crate::routes::{self, Route};
use crate::store::KeyValueStore;

/// Render state of a gated page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    /// Authorization unknown; content is withheld.
    #[default]
    Unchecked,
    /// Authorization settled; content may render unless a redirect was issued.
    Checked,
}

/// Settled decision for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateOutcome {
    pub state: GateState,
    pub redirect: Option<Route>,
}

impl GateOutcome {
    /// Render the requested page in place.
    #[must_use]
    pub fn render() -> Self {
        Self { state: GateState::Checked, redirect: None }
    }

    /// Leave the page. `state` records whether content was released first.
    #[must_use]
    pub fn redirect(to: Route, state: GateState) -> Self {
        Self { state, redirect: Some(to) }
    }

    #[must_use]
    pub fn renders_content(&self) -> bool {
        self.state == GateState::Checked && self.redirect.is_none()
    }
}

/// Result of [`SessionGate::check`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckResult {
    Settled(GateOutcome),
    /// A newer check started before this one resolved; ignore it.
    Superseded,
}

impl CheckResult {
    #[must_use]
    pub fn outcome(self) -> Option<GateOutcome> {
        match self {
            Self::Settled(outcome) => Some(outcome),
            Self::Superseded => None,
        }
    }
}

/// Decide where a signed-in user may go given a fresh profile.
#[must_use]
pub fn decide_signed_in(path: &str, user: &UserProfile) -> GateOutcome {
    let in_onboarding = routes::is_onboarding(path);
    if !user.onboarding_completed && !in_onboarding {
        GateOutcome::redirect(Route::Onboarding, GateState::Unchecked)
    } else if user.onboarding_completed && in_onboarding {
        GateOutcome::redirect(Route::Dashboard, GateState::Unchecked)
    } else {
        GateOutcome::render()
    }
}

/// Decide where a visitor without a token may go.
#[must_use]
pub fn decide_signed_out(path: &str) -> GateOutcome {
    if routes::is_public(path) {
        GateOutcome::render()
    } else {
        GateOutcome::redirect(Route::Login, GateState::Checked)
    }
}

/// Session gate over an API client and the shared client-side stores.
#[derive(Clone, Debug)]
pub struct SessionGate<T, S> {
    api: ApiClient<T, S>,
    profiles: ProfileCache<S>,
    generation: Arc<AtomicU64>,
}

impl<T: Transport, S: KeyValueStore> SessionGate<T, S> {
    pub fn new(api: ApiClient<T, S>, profiles: ProfileCache<S>) -> Self {
        Self { api, profiles, generation: Arc::new(AtomicU64::new(0)) }
    }

    pub fn api(&self) -> &ApiClient<T, S> {
        &self.api
    }

    pub fn profiles(&self) -> &ProfileCache<S> {
        &self.profiles
    }

    /// Generation of the most recently started check.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation() == generation
    }

    /// Run the authorization check for `path`.
    pub async fn check(&self, path: &str) -> CheckResult {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if self.api.tokens().get_token().is_none() {
            self.profiles.clear_user();
            let outcome = decide_signed_out(path);
            log::debug!("gate[{generation}]: no token at {path}, redirect={:?}", outcome.redirect);
            return CheckResult::Settled(outcome);
        }

        let fetched = self.api.fetch_me().await;
        if !self.is_current(generation) {
            log::debug!("gate[{generation}]: superseded by gate[{}], dropping result for {path}", self.generation());
            return CheckResult::Superseded;
        }

        match fetched {
            Ok(user) => {
                self.profiles.set_user(&user);
                let outcome = decide_signed_in(path, &user);
                log::debug!(
                    "gate[{generation}]: onboarding_completed={} at {path}, redirect={:?}",
                    user.onboarding_completed,
                    outcome.redirect
                );
                CheckResult::Settled(outcome)
            }
            Err(e) => {
                log::warn!("gate[{generation}]: profile fetch failed at {path}: {e}");
                self.api.tokens().clear_token();
                self.profiles.clear_user();
                CheckResult::Settled(GateOutcome::redirect(Route::Login, GateState::Checked))
            }
        }
    }
}
