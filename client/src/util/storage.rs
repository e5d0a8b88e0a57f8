//! Browser `localStorage` token slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the csr-only web-sys glue behind [`TokenStore`] so the
//! session never touches `window` directly. Native builds read nothing and
//! write nothing.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::session::TokenStore;

/// Token slot under one `localStorage` key. Storage is looked up on every
/// call, so no JS handle is held.
#[derive(Clone, Copy, Debug)]
pub struct LocalStorageTokenStore {
    key: &'static str,
}

impl LocalStorageTokenStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(self.key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(self.key, token);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn remove(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(self.key);
            }
        }
    }
}
