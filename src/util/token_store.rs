//! Persistence for the single admin token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session state and the route guard both read the same key here. The
//! guard never goes through the session, so this store is the only source of
//! truth for "is a token present right now".
//!
//! ERROR HANDLING
//! ==============
//! `localStorage` can be missing (native builds), disabled, or throw on
//! access. Every failure is logged and degrades to "no token" / no-op so
//! navigation never crashes on storage errors.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Well-known `localStorage` key holding the admin token.
pub const ADMIN_TOKEN_KEY: &str = "admin_token";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("no browser window available")]
    NoWindow,
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("localStorage {op} failed for key {key}: {detail}")]
    Access { op: &'static str, key: &'static str, detail: String },
}

/// Read/write/delete access to one token slot.
///
/// Reads treat an empty stored string as absent.
pub trait TokenStore {
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str);
    fn clear(&self);
}

/// Token store backed by browser `localStorage`.
///
/// Outside a `csr` build every operation is a no-op and reads yield
/// `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalTokenStore {
    key: &'static str,
}

impl LocalTokenStore {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    pub const fn key(&self) -> &'static str {
        self.key
    }
}

impl Default for LocalTokenStore {
    fn default() -> Self {
        Self::new(ADMIN_TOKEN_KEY)
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::NoWindow)?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StorageError::Unavailable("storage disabled".to_owned()))
}

#[cfg(feature = "csr")]
fn access_error(op: &'static str, key: &'static str, err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Access { op, key, detail: format!("{err:?}") }
}

impl TokenStore for LocalTokenStore {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let result = local_storage()
                .and_then(|s| s.get_item(self.key).map_err(|e| access_error("read", self.key, &e)));
            match result {
                Ok(value) => value.filter(|t| !t.is_empty()),
                Err(e) => {
                    log::warn!("token read degraded to absent: {e}");
                    None
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn write(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let result = local_storage()
                .and_then(|s| s.set_item(self.key, token).map_err(|e| access_error("write", self.key, &e)));
            if let Err(e) = result {
                log::warn!("token write skipped: {e}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            let result = local_storage()
                .and_then(|s| s.remove_item(self.key).map_err(|e| access_error("clear", self.key, &e)));
            if let Err(e) = result {
                log::warn!("token clear skipped: {e}");
            }
        }
    }
}

/// In-memory token slot for tests and hosts without browser storage.
///
/// Clones share the same slot, so one handle can play "another tab" or an
/// external actor clearing storage behind the session's back.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.write(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> Option<String> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.clone().filter(|t| !t.is_empty())
    }

    fn write(&self, token: &str) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(token.to_owned());
    }

    fn clear(&self) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }
}
