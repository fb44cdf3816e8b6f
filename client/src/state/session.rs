//! Session state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one [`SessionContext`] and provides it to every route. The
//! `AuthGuard` runs its gate; pages use its API client and stores for the
//! login/register/onboarding flows. `profile` mirrors the profile cache so
//! views re-render when the gate or a flow rewrites it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;
use session::{ApiClient, ApiConfig, ProfileCache, SessionGate, TokenStore, UserProfile};

use crate::net::api::BrowserTransport;
use crate::util::storage::BrowserStorage;

pub type ClientApi = ApiClient<BrowserTransport, BrowserStorage>;
pub type ClientGate = SessionGate<BrowserTransport, BrowserStorage>;
pub type ClientProfiles = ProfileCache<BrowserStorage>;

/// Gate, API client and stores plus a reactive copy of the cached profile.
#[derive(Clone, Debug)]
pub struct SessionContext {
    pub gate: ClientGate,
    pub profile: RwSignal<Option<UserProfile>>,
}

impl SessionContext {
    /// Wire everything to `localStorage` and the configured API base URL.
    pub fn new(config: ApiConfig) -> Self {
        let tokens = TokenStore::new(BrowserStorage);
        let api = ApiClient::new(config, BrowserTransport, tokens);

        let initial = ProfileCache::new(BrowserStorage).get_user();
        let profile = RwSignal::new(initial);
        let profiles = ProfileCache::new(BrowserStorage)
            .with_listener(Arc::new(move |user: Option<&UserProfile>| profile.set(user.cloned())));

        Self { gate: SessionGate::new(api, profiles), profile }
    }

    pub fn api(&self) -> &ClientApi {
        self.gate.api()
    }

    pub fn profiles(&self) -> &ClientProfiles {
        self.gate.profiles()
    }
}

/// Name shown in the sidebar for the last-known profile.
pub fn profile_label(profile: Option<&UserProfile>) -> String {
    profile.map_or_else(|| "Signed out".to_owned(), |user| user.display_name().to_owned())
}

/// Secondary line under the name: skill level and graduation, when known.
pub fn profile_subtitle(profile: Option<&UserProfile>) -> String {
    let Some(user) = profile else {
        return String::new();
    };
    let skill = user.coding_skill_level.as_deref().filter(|s| !s.is_empty());
    let grad = user.graduation_date.as_deref().filter(|s| !s.is_empty());
    match (skill, grad) {
        (Some(skill), Some(grad)) => format!("{skill} · Class of {}", graduation_year(grad)),
        (Some(skill), None) => skill.to_owned(),
        (None, Some(grad)) => format!("Class of {}", graduation_year(grad)),
        (None, None) => String::new(),
    }
}

fn graduation_year(date: &str) -> &str {
    date.split('-').next().unwrap_or(date)
}
