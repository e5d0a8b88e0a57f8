//! Session value object wrapping the persisted bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `Session` is built at app start and handed to the router, the
//! navigation bar, and the HTTP client through context. Nothing else reads
//! browser storage for the token.
//!
//! TRADE-OFFS
//! ==========
//! Authentication is a presence check only. Any stored value, even an empty
//! or malformed one, counts as signed in; the API rejects bad tokens.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

/// Backing storage for the single token slot.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn remove(&self);
}

/// Process-local token slot, used off-browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|slot| slot.clone())
    }

    fn save(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn remove(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

/// Shared handle to the current session token.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore + Send + Sync>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore + Send + Sync>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::default()))
    }

    /// Current token, read from storage on every call.
    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    pub fn set_token(&self, token: &str) {
        self.store.save(token);
    }

    /// Drop the token. There is no server-side session to invalidate.
    pub fn clear(&self) {
        self.store.remove();
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
