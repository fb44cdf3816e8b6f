//! User profile snapshot and its read-through cache.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cache mirrors the server's last answer to `GET /auth/me` so views can
//! read the profile synchronously. It is advisory only: the session gate
//! always re-fetches before deciding a redirect and only ever writes here.
//!
//! ERROR HANDLING
//! ==============
//! Malformed stored JSON reads as `None` (logged at `warn`). Storage
//! corruption therefore looks like a logged-out view instead of a crash.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::store::KeyValueStore;

/// Storage key holding the JSON-serialized profile snapshot.
pub const USER_KEY: &str = "internshiproute_user";

/// The server's view of the current user, as returned by `/auth/me`.
///
/// Every field defaults when missing so an unexpected response shape never
/// fails deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub id: Option<i64>,
    pub email: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Free-form skill label; the onboarding form sends a [`SkillLevel`].
    pub coding_skill_level: Option<String>,
    /// ISO date (`YYYY-MM-DD`) or month (`YYYY-MM`).
    pub graduation_date: Option<String>,
    pub onboarding_completed: bool,
}

impl UserProfile {
    /// Display name, falling back to the email, then to a generic label.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or("Student")
    }
}

/// Coding-skill levels offered during onboarding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(format!("unknown skill level: {other}")),
        }
    }
}

/// Callback fired after every cache write with the new snapshot.
pub type ProfileListener = Arc<dyn Fn(Option<&UserProfile>) + Send + Sync>;

/// User Profile Cache over an injected [`KeyValueStore`].
#[derive(Clone)]
pub struct ProfileCache<S> {
    store: S,
    listener: Option<ProfileListener>,
}

impl<S: KeyValueStore> ProfileCache<S> {
    pub fn new(store: S) -> Self {
        Self { store, listener: None }
    }

    /// Attach a change listener so reactive views can follow cache writes.
    #[must_use]
    pub fn with_listener(mut self, listener: ProfileListener) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Last-known profile, or `None` when absent or unparseable.
    pub fn get_user(&self) -> Option<UserProfile> {
        let raw = self.store.get(USER_KEY)?;
        if raw.is_empty() {
            return None;
        }
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("ignoring malformed cached profile: {e}");
                None
            }
        }
    }

    pub fn set_user(&self, user: &UserProfile) {
        let raw = match serde_json::to_string(user) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("failed to serialize profile snapshot: {e}");
                return;
            }
        };
        self.store.set(USER_KEY, &raw);
        self.notify(Some(user));
    }

    pub fn clear_user(&self) {
        self.store.remove(USER_KEY);
        self.notify(None);
    }

    fn notify(&self, user: Option<&UserProfile>) {
        if let Some(listener) = &self.listener {
            listener(user);
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for ProfileCache<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileCache")
            .field("store", &self.store)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
