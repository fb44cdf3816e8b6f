//! Browser `localStorage` backing for the session stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session::TokenStore` and `session::ProfileCache` are generic over
//! `KeyValueStore`; this is the implementation the running app injects.
//! Outside the browser (no `csr` feature, no window, storage disabled) every
//! read is absent and every write is dropped.

use session::KeyValueStore;

/// Zero-sized handle to `window.localStorage`, resolved on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("localStorage unavailable: {e:?}");
            None
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            match local_storage()?.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("localStorage read of {key} failed: {e:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("localStorage write of {key} failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if let Err(e) = storage.remove_item(key) {
                    log::warn!("localStorage remove of {key} failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}
