//! Login, registration, onboarding and logout flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are the only writers of the token store besides the session gate.
//! Each flow validates form input first, performs exactly one API call and
//! returns the route the page should navigate to next.
//!
//! ERROR HANDLING
//! ==============
//! Failures carry a user-facing message; the underlying [`ApiError`] is
//! logged, not shown.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use serde::Deserialize;

use crate::api::{ApiClient, ApiError, RequestOptions, Transport};
use crate::profile::{ProfileCache, SkillLevel, UserProfile};
use crate::routes::Route;
use crate::store::KeyValueStore;

pub const LOGIN_FAILED: &str = "Invalid email or password.";
pub const REGISTER_FAILED: &str = "Could not create account. Try another email.";
pub const ONBOARDING_FAILED: &str = "Something went wrong. Please try again.";
pub const MISSING_CREDENTIALS: &str = "Enter both email and password.";
pub const INVALID_GRADUATION_DATE: &str = "Graduation date must look like 2027-05.";

/// Failure surfaced by an account flow.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// Form input rejected before any request was made.
    #[error("{0}")]
    Invalid(&'static str),
    /// The server rejected or failed the request.
    #[error("{message}")]
    Api {
        message: &'static str,
        #[source]
        source: ApiError,
    },
}

impl AccountError {
    /// Message to show inline under the form.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Invalid(message) | Self::Api { message, .. } => *message,
        }
    }
}

/// Email + password as typed into the login/register forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    /// Trim the email and require both fields.
    ///
    /// # Errors
    ///
    /// Returns [`MISSING_CREDENTIALS`] when either field is blank.
    pub fn validate(&self) -> Result<Self, &'static str> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(MISSING_CREDENTIALS);
        }
        Ok(Self::new(email, self.password.clone()))
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "email": self.email, "password": self.password })
    }
}

/// Body of `POST /auth/login` and `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub user: UserProfile,
}

/// Body of `POST /user/onboarding`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub user: UserProfile,
}

/// Onboarding form as submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OnboardingForm {
    pub experience_level: SkillLevel,
    pub graduation_date: Option<String>,
}

impl OnboardingForm {
    /// Normalize the optional graduation date and check its shape.
    ///
    /// # Errors
    ///
    /// Returns [`INVALID_GRADUATION_DATE`] unless the date is blank,
    /// `YYYY-MM` or `YYYY-MM-DD`.
    pub fn validate(&self) -> Result<Self, &'static str> {
        let graduation_date = match self.graduation_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) if is_iso_month_or_date(raw) => Some(raw.to_owned()),
            Some(_) => return Err(INVALID_GRADUATION_DATE),
        };
        Ok(Self { experience_level: self.experience_level, graduation_date })
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "experience_level": self.experience_level.as_str(),
            "graduation_date": self.graduation_date,
        })
    }
}

fn is_digits(raw: &str, len: usize) -> bool {
    raw.len() == len && raw.bytes().all(|b| b.is_ascii_digit())
}

fn parse_in_range(raw: &str, lo: u32, hi: u32) -> Option<u32> {
    match raw.parse::<u32>() {
        Ok(n) if (lo..=hi).contains(&n) => Some(n),
        _ => None,
    }
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// True for `YYYY-MM` and `YYYY-MM-DD` naming a real calendar month or day.
#[must_use]
pub fn is_iso_month_or_date(raw: &str) -> bool {
    let parts: Vec<&str> = raw.split('-').collect();
    let (year, month, day) = match parts.as_slice() {
        [year, month] => (*year, *month, None),
        [year, month, day] => (*year, *month, Some(*day)),
        _ => return false,
    };
    if !is_digits(year, 4) || !is_digits(month, 2) {
        return false;
    }
    let (Some(year), Some(month)) = (parse_in_range(year, 1, 9999), parse_in_range(month, 1, 12)) else {
        return false;
    };
    match day {
        None => true,
        Some(day) => is_digits(day, 2) && parse_in_range(day, 1, days_in_month(year, month)).is_some(),
    }
}

/// Store the session returned by login/register and pick the landing route.
fn establish<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    profiles: &ProfileCache<S>,
    response: &AuthResponse,
) -> Route {
    api.tokens().set_token(&response.access_token);
    profiles.set_user(&response.user);
    Route::landing(response.user.onboarding_completed)
}

async fn authenticate<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    profiles: &ProfileCache<S>,
    path: &str,
    credentials: &Credentials,
    failure: &'static str,
) -> Result<Route, AccountError> {
    let credentials = credentials.validate().map_err(AccountError::Invalid)?;
    let response: AuthResponse = api
        .request(path, RequestOptions::post(credentials.to_json()))
        .await
        .map_err(|source| {
            log::warn!("account: {path} failed: {source}");
            AccountError::Api { message: failure, source }
        })?;
    Ok(establish(api, profiles, &response))
}

/// Sign in via `POST /auth/login`.
///
/// # Errors
///
/// Returns [`AccountError::Invalid`] for blank input and
/// [`AccountError::Api`] with [`LOGIN_FAILED`] for any API failure.
pub async fn login<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    profiles: &ProfileCache<S>,
    credentials: &Credentials,
) -> Result<Route, AccountError> {
    authenticate(api, profiles, "/auth/login", credentials, LOGIN_FAILED).await
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns [`AccountError::Invalid`] for blank input and
/// [`AccountError::Api`] with [`REGISTER_FAILED`] for any API failure.
pub async fn register<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    profiles: &ProfileCache<S>,
    credentials: &Credentials,
) -> Result<Route, AccountError> {
    authenticate(api, profiles, "/auth/register", credentials, REGISTER_FAILED).await
}

/// Finish onboarding via `POST /user/onboarding`.
///
/// # Errors
///
/// Returns [`AccountError::Invalid`] for a malformed graduation date and
/// [`AccountError::Api`] with [`ONBOARDING_FAILED`] for any API failure.
pub async fn complete_onboarding<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    profiles: &ProfileCache<S>,
    form: &OnboardingForm,
) -> Result<Route, AccountError> {
    let form = form.validate().map_err(AccountError::Invalid)?;
    let response: ProfileResponse = api
        .request("/user/onboarding", RequestOptions::post(form.to_json()))
        .await
        .map_err(|source| {
            log::warn!("account: onboarding failed: {source}");
            AccountError::Api { message: ONBOARDING_FAILED, source }
        })?;
    profiles.set_user(&response.user);
    Ok(Route::Dashboard)
}

/// Drop the local session. The server keeps no session state to revoke.
pub fn logout<T: Transport, S: KeyValueStore>(api: &ApiClient<T, S>, profiles: &ProfileCache<S>) -> Route {
    api.tokens().clear_token();
    profiles.clear_user();
    Route::Login
}
