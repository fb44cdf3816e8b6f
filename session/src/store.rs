//! Key-value storage seam for browser-persisted client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token store and profile cache never touch `localStorage` directly.
//! They are generic over [`KeyValueStore`] so the browser build can plug in
//! `window.localStorage` while tests and non-browser builds use [`MemoryStore`].

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// String key-value storage with page-session lifetime.
///
/// Implementations must never fail loudly: an unavailable backend reads as
/// absent and swallows writes.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
    /// Remove `key` if present.
    fn remove(&self, key: &str);
}

/// In-memory [`KeyValueStore`]. Clones share the same backing map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}
