//! Browser vs. server execution context.
//!
//! Session and guard code take the context as a value instead of probing the
//! build at every call, so both branches run under native tests.

/// Where the current code is executing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionContext {
    /// Hydrated in a browser tab with `window` and `localStorage`.
    Client,
    /// Server-side render or any host without browser storage.
    Server,
}

impl ExecutionContext {
    /// Context implied by the build: `csr` builds run in the browser.
    pub const fn current() -> Self {
        if cfg!(feature = "csr") { Self::Client } else { Self::Server }
    }

    pub const fn is_client(self) -> bool {
        matches!(self, Self::Client)
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(feature = "csr"))]
    fn native_test_build_is_server_context() {
        assert_eq!(ExecutionContext::current(), ExecutionContext::Server);
        assert_eq!(ExecutionContext::default(), ExecutionContext::Server);
    }

    #[test]
    fn only_client_reports_is_client() {
        assert!(ExecutionContext::Client.is_client());
        assert!(!ExecutionContext::Server.is_client());
    }
}
