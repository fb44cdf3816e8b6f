//! Routing surface the session gate reasons about.
//!
//! `/login` and `/register` are public. Everything else is gated, with
//! `/onboarding` special-cased for users who have not finished setup.
//! Matching is by path segment, so `/login-help` is not public.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const ONBOARDING_PATH: &str = "/onboarding";
pub const DASHBOARD_PATH: &str = "/dashboard";

const PUBLIC_PATHS: [&str; 2] = [LOGIN_PATH, REGISTER_PATH];

/// Navigation targets the client redirects to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Onboarding,
    Dashboard,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Register => REGISTER_PATH,
            Self::Onboarding => ONBOARDING_PATH,
            Self::Dashboard => DASHBOARD_PATH,
        }
    }

    /// Where a freshly authenticated user lands.
    #[must_use]
    pub fn landing(onboarding_completed: bool) -> Self {
        if onboarding_completed { Self::Dashboard } else { Self::Onboarding }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Strip query string, fragment and trailing slashes. The root stays `/`.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// True when `path` is `base` or lies beneath it.
fn is_under(path: &str, base: &str) -> bool {
    let path = normalize_path(path);
    path == base || path.strip_prefix(base).is_some_and(|rest| rest.starts_with('/'))
}

/// True for routes anyone may view without a token.
#[must_use]
pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|base| is_under(path, base))
}

/// True for `/onboarding` and anything under it.
#[must_use]
pub fn is_onboarding(path: &str) -> bool {
    is_under(path, ONBOARDING_PATH)
}
