//! Navigation gate for admin pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every client-side navigation is checked against the protected prefix. The
//! guard reads the token store directly, never the session's cached flag, so
//! a token removed behind the session's back still blocks `/admin`.
//!
//! TRADE-OFFS
//! ==========
//! The Leptos hook runs as an effect keyed on the router location, so the
//! redirect lands right after the route resolves rather than before it.
//! Outside the browser the guard always continues; admin views are
//! client-only.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use super::execution::ExecutionContext;
use super::token_store::TokenStore;

/// Any path starting with this prefix requires a token.
pub const PROTECTED_PREFIX: &str = "/admin";
/// Where unauthenticated navigations to protected paths are sent.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of checking one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Continue,
    Redirect(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteGuard {
    protected_prefix: &'static str,
    login_path: &'static str,
    context: ExecutionContext,
}

impl RouteGuard {
    pub const fn new(protected_prefix: &'static str, login_path: &'static str, context: ExecutionContext) -> Self {
        Self { protected_prefix, login_path, context }
    }

    /// Plain string prefix match, so `/administrator` is protected too.
    pub fn is_protected(&self, path: &str) -> bool {
        path.starts_with(self.protected_prefix)
    }

    /// Decide whether navigation to `path` may proceed.
    pub fn check(&self, path: &str, store: &impl TokenStore) -> GuardDecision {
        if !self.context.is_client() || !self.is_protected(path) {
            return GuardDecision::Continue;
        }
        match store.read() {
            Some(_) => GuardDecision::Continue,
            None => GuardDecision::Redirect(self.login_path),
        }
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(PROTECTED_PREFIX, LOGIN_PATH, ExecutionContext::current())
    }
}

/// Check one navigation and hand a redirect to `navigate`.
///
/// Redirects replace the current history entry so "back" does not bounce
/// into the guard again.
pub fn apply_guard<F>(guard: &RouteGuard, path: &str, store: &impl TokenStore, navigate: &F) -> GuardDecision
where
    F: Fn(&str, NavigateOptions),
{
    let decision = guard.check(path, store);
    if let GuardDecision::Redirect(target) = decision {
        log::info!("route guard: no admin token for {path}, redirecting to {target}");
        navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
    decision
}

/// Re-run `guard` on every location change and redirect when it says so.
///
/// Must be called inside a `<Router>`.
pub fn install_route_guard<S, F>(guard: RouteGuard, store: S, navigate: F)
where
    S: TokenStore + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        apply_guard(&guard, &path, &store, &navigate);
    });
}
