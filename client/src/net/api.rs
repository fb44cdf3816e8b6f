//! `fetch` transport for the session API client.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds and tests: every send fails with a network error, since the
//! API is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures are reported as `ApiError::Network`; status handling
//! and JSON decoding stay in `session::ApiClient`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use session::api::{ApiError, ApiRequest, ApiResponse, Transport};

/// Transport backed by the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

fn network_error(stage: &str, detail: impl std::fmt::Display) -> ApiError {
    ApiError::Network(format!("{stage}: {detail}"))
}

/// Human label used in logs for a request.
pub(crate) fn describe(request: &ApiRequest) -> String {
    format!("{} {}", request.method, request.url)
}

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;
            use session::api::Method;

            let label = describe(&request);
            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Patch => Request::patch(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let built = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| network_error("build", e))?;

            let resp = built.send().await.map_err(|e| {
                log::warn!("{label} failed: {e}");
                network_error("send", e)
            })?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| network_error("read body", e))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(network_error(&describe(&request), "not available outside the browser"))
        }
    }
}
