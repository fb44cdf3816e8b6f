//! Persisted bearer token.
//!
//! The token is opaque: it is written once after login/register, read on
//! every protected navigation and removed on logout or when the session gate
//! sees an authentication failure. No expiry or shape validation happens here.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use crate::store::KeyValueStore;

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "internshiproute_token";

/// Token Store over an injected [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct TokenStore<S> {
    store: S,
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current token, or `None` when absent. An empty string counts as absent.
    pub fn get_token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    pub fn clear_token(&self) {
        self.store.remove(TOKEN_KEY);
    }
}
