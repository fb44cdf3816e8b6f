//! API configuration.
//!
//! The browser bundle has no process environment, so the base URL is
//! captured from `API_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `API_URL` is unset or blank.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Build config from the `API_URL` value baked in at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_value(option_env!("API_URL"))
    }

    /// Build config from a raw base URL. Blank values fall back to
    /// [`DEFAULT_API_BASE_URL`]; trailing slashes are trimmed.
    #[must_use]
    pub fn from_value(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url }
    }

    /// Absolute URL for an API path such as `/auth/me`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}
