//! Admin session state shared by every component in the tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `SessionState` and provides it as `RwSignal` context, so
//! the login form, the admin page, and any header all observe the same flag.
//! The flag is a cache of "a token exists in the store" and can go stale
//! until `check_auth` runs again; the route guard never consults it.
//!
//! TRADE-OFFS
//! ==========
//! Nothing here signals errors. Missing storage, non-browser hosts, and empty
//! tokens all resolve to "not authenticated" or a no-op.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::execution::ExecutionContext;
use crate::util::token_store::{LocalTokenStore, TokenStore};

/// Cached admin authentication flag plus the store it is derived from.
#[derive(Clone, Debug)]
pub struct SessionState<S = LocalTokenStore> {
    store: S,
    context: ExecutionContext,
    authenticated: bool,
}

impl<S: TokenStore> SessionState<S> {
    /// New session, unauthenticated until the first `check_auth`.
    pub fn new(store: S, context: ExecutionContext) -> Self {
        Self { store, context, authenticated: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn context(&self) -> ExecutionContext {
        self.context
    }

    /// Refresh the flag from the store and return it.
    ///
    /// On the server this returns `false` and leaves the flag alone.
    pub fn check_auth(&mut self) -> bool {
        if !self.context.is_client() {
            return false;
        }
        self.authenticated = self.store.read().is_some();
        log::debug!("session check: authenticated={}", self.authenticated);
        self.authenticated
    }

    /// Persist `token` and mark the session authenticated.
    ///
    /// An absent or empty token is ignored; it does not clear an existing
    /// session.
    pub fn set_auth(&mut self, token: Option<&str>) {
        if !self.context.is_client() {
            return;
        }
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return;
        };
        self.store.write(token);
        self.authenticated = true;
        log::info!("admin session established");
    }

    pub fn logout(&mut self) {
        if !self.context.is_client() {
            return;
        }
        self.store.clear();
        self.authenticated = false;
        log::info!("admin session cleared");
    }

    /// Current stored token, `None` on the server.
    pub fn get_token(&self) -> Option<String> {
        if !self.context.is_client() {
            return None;
        }
        self.store.read()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(LocalTokenStore::default(), ExecutionContext::current())
    }
}
