//! JSON API client for the external InternshipRoute server.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every call is a single attempt against `ApiConfig::base_url`: no retry,
//! no timeout, no backoff. The actual network hop is delegated to a
//! [`Transport`] so the browser build can use `fetch` while tests script
//! responses.
//!
//! ERROR HANDLING
//! ==============
//! Any non-2xx status becomes [`ApiError::Status`] carrying the code. The
//! client does not tell 401 apart from 500; callers decide what a failure
//! means.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;
use std::future::Future;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::profile::UserProfile;
use crate::store::KeyValueStore;
use crate::token::TokenStore;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Error returned by [`ApiClient::request`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered outside the 2xx range.
    #[error("API error: {0}")]
    Status(u16),
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The 2xx body was not the JSON shape the caller asked for.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status for [`ApiError::Status`], `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved request handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Value of the first header named `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw HTTP response as seen by the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One network round-trip. Implementations must not retry.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// Per-call options, mirroring `fetch`'s `RequestInit` subset the app uses.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<serde_json::Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn post(body: serde_json::Value) -> Self {
        Self { method: Method::Post, body: Some(body), headers: Vec::new() }
    }

    #[must_use]
    pub fn patch(body: serde_json::Value) -> Self {
        Self { method: Method::Patch, body: Some(body), headers: Vec::new() }
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }
}

/// Body of `GET /auth/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MeResponse {
    #[serde(default)]
    pub user: UserProfile,
}

/// Authenticated JSON client.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    config: ApiConfig,
    transport: T,
    tokens: TokenStore<S>,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(config: ApiConfig, transport: T, tokens: TokenStore<S>) -> Self {
        Self { config, transport, tokens }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn tokens(&self) -> &TokenStore<S> {
        &self.tokens
    }

    /// Resolve `path` and `options` into a concrete request, attaching the
    /// bearer token when one is stored.
    pub fn build_request(&self, path: &str, options: RequestOptions) -> ApiRequest {
        let mut headers = vec![(CONTENT_TYPE.to_owned(), JSON_CONTENT_TYPE.to_owned())];
        if let Some(token) = self.tokens.get_token() {
            headers.push((AUTHORIZATION.to_owned(), format!("Bearer {token}")));
        }
        for (name, value) in options.headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
            headers.push((name, value));
        }
        ApiRequest {
            method: options.method,
            url: self.config.url(path),
            headers,
            body: options.body.map(|body| body.to_string()),
        }
    }

    /// Issue a request and decode the JSON body as `R`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when the transport fails,
    /// [`ApiError::Status`] for any non-2xx response and
    /// [`ApiError::Decode`] when the body does not match `R`.
    pub async fn request<R: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<R, ApiError> {
        let request = self.build_request(path, options);
        log::debug!("api: {} {}", request.method, request.url);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::Status(response.status));
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Fetch the current user's profile from `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from [`ApiClient::request`].
    pub async fn fetch_me(&self) -> Result<UserProfile, ApiError> {
        let body: MeResponse = self.request("/auth/me", RequestOptions::get()).await?;
        Ok(body.user)
    }
}
