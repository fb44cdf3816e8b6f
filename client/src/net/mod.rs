//! Networking for the session API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session::ApiClient` builds requests and interprets responses; `api`
//! only moves bytes through the browser's `fetch`.

pub mod api;
