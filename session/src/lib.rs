//! Client-side session layer for the InternshipRoute front-end.
//!
//! This crate owns everything the browser client needs to decide whether a
//! viewer may see a page: the persisted bearer token, the cached profile
//! snapshot, the JSON API client and the per-navigation session gate. It has
//! no browser dependencies; the `client` crate supplies `localStorage` and
//! `fetch` through the [`store::KeyValueStore`] and [`api::Transport`] seams.

pub mod account;
pub mod api;
pub mod config;
pub mod gate;
pub mod profile;
pub mod routes;
pub mod store;
pub mod token;

pub use api::{ApiClient, ApiError, Transport};
pub use config::ApiConfig;
pub use gate::{CheckResult, GateOutcome, GateState, SessionGate};
pub use profile::{ProfileCache, UserProfile};
pub use routes::Route;
pub use store::{KeyValueStore, MemoryStore};
pub use token::TokenStore;

#[cfg(test)]
#[path = "helpers_test.rs"]
pub(crate) mod test_helpers;
