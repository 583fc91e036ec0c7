use super::*;
use crate::util::route_guard::{GuardDecision, LOGIN_PATH, PROTECTED_PREFIX, RouteGuard};
use crate::util::token_store::MemoryTokenStore;

fn client_session() -> (SessionState<MemoryTokenStore>, MemoryTokenStore) {
    let store = MemoryTokenStore::new();
    (SessionState::new(store.clone(), ExecutionContext::Client), store)
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_session_is_unauthenticated() {
    let (session, _) = client_session();
    assert!(!session.is_authenticated());
}

#[test]
fn new_session_ignores_existing_token_until_checked() {
    let store = MemoryTokenStore::with_token("abc123");
    let mut session = SessionState::new(store, ExecutionContext::Client);
    assert!(!session.is_authenticated());
    assert!(session.check_auth());
    assert!(session.is_authenticated());
}

#[cfg(not(feature = "csr"))]
#[test]
fn default_session_uses_server_context_in_native_builds() {
    let session = SessionState::default();
    assert_eq!(session.context(), ExecutionContext::Server);
    assert!(!session.is_authenticated());
}

// =============================================================
// set_auth / logout
// =============================================================

#[test]
fn set_auth_stores_token_and_authenticates() {
    let (mut session, _) = client_session();
    session.set_auth(Some("abc123"));
    assert!(session.is_authenticated());
    assert_eq!(session.get_token().as_deref(), Some("abc123"));
    assert!(session.check_auth());
}

#[test]
fn logout_clears_token_and_flag() {
    let (mut session, store) = client_session();
    session.set_auth(Some("abc123"));
    session.logout();
    assert!(!session.is_authenticated());
    assert_eq!(session.get_token(), None);
    assert_eq!(store.read(), None);
    assert!(!session.check_auth());
}

#[test]
fn set_auth_with_empty_token_is_noop() {
    let (mut session, store) = client_session();
    session.set_auth(Some("abc123"));
    session.set_auth(Some(""));
    assert!(session.is_authenticated());
    assert_eq!(store.read().as_deref(), Some("abc123"));
}

#[test]
fn set_auth_with_missing_token_is_noop() {
    let (mut session, store) = client_session();
    session.set_auth(Some("abc123"));
    session.set_auth(None);
    assert!(session.is_authenticated());
    assert_eq!(store.read().as_deref(), Some("abc123"));
}

#[test]
fn set_auth_with_empty_token_does_not_authenticate_fresh_session() {
    let (mut session, store) = client_session();
    session.set_auth(Some(""));
    assert!(!session.is_authenticated());
    assert_eq!(store.read(), None);
}

#[test]
fn set_auth_replaces_previous_token() {
    let (mut session, _) = client_session();
    session.set_auth(Some("first"));
    session.set_auth(Some("second"));
    assert_eq!(session.get_token().as_deref(), Some("second"));
}

// =============================================================
// Server context
// =============================================================

#[test]
fn server_check_auth_returns_false_without_touching_store() {
    let store = MemoryTokenStore::with_token("abc123");
    let mut session = SessionState::new(store.clone(), ExecutionContext::Server);
    assert!(!session.check_auth());
    assert_eq!(store.read().as_deref(), Some("abc123"));
}

#[test]
fn server_operations_are_noops() {
    let store = MemoryTokenStore::with_token("abc123");
    let mut session = SessionState::new(store.clone(), ExecutionContext::Server);
    session.set_auth(Some("other"));
    assert!(!session.is_authenticated());
    session.logout();
    assert_eq!(store.read().as_deref(), Some("abc123"));
    assert_eq!(session.get_token(), None);
}

// =============================================================
// Staleness
// =============================================================

#[test]
fn flag_stays_stale_after_external_removal_until_checked() {
    let (mut session, store) = client_session();
    session.set_auth(Some("abc123"));
    store.clear();
    assert!(session.is_authenticated());
    assert!(!session.check_auth());
    assert!(!session.is_authenticated());
}

#[test]
fn check_auth_picks_up_externally_written_token() {
    let (mut session, store) = client_session();
    store.write("from-another-tab");
    assert!(session.check_auth());
}

// =============================================================
// Session + guard scenarios
// =============================================================

fn client_guard() -> RouteGuard {
    RouteGuard::new(PROTECTED_PREFIX, LOGIN_PATH, ExecutionContext::Client)
}

#[test]
fn empty_store_blocks_admin_dashboard() {
    let (_, store) = client_session();
    assert_eq!(client_guard().check("/admin/dashboard", &store), GuardDecision::Redirect("/login"));
}

#[test]
fn set_auth_opens_admin_dashboard() {
    let (mut session, store) = client_session();
    session.set_auth(Some("abc123"));
    assert_eq!(client_guard().check("/admin/dashboard", &store), GuardDecision::Continue);
}

#[test]
fn gallery_is_open_without_token() {
    let (_, store) = client_session();
    assert_eq!(client_guard().check("/gallery", &store), GuardDecision::Continue);
}

#[test]
fn logout_after_set_auth_leaves_no_token() {
    let (mut session, store) = client_session();
    session.set_auth(Some("abc123"));
    session.logout();
    assert_eq!(session.get_token(), None);
    assert_eq!(client_guard().check("/admin/dashboard", &store), GuardDecision::Redirect("/login"));
}

#[test]
fn guard_ignores_stale_session_flag() {
    let (mut session, store) = client_session();
    session.set_auth(Some("abc123"));
    store.clear();
    assert!(session.is_authenticated());
    assert_eq!(client_guard().check("/admin", &store), GuardDecision::Redirect("/login"));
}

// =============================================================
// Empty stored values
// =============================================================

#[test]
fn empty_stored_token_reads_as_absent() {
    let store = MemoryTokenStore::with_token("");
    let mut session = SessionState::new(store, ExecutionContext::Client);
    assert_eq!(session.get_token(), None);
    assert!(!session.check_auth());
    assert!(!session.is_authenticated());
}
