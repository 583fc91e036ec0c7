//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and state
//! logic so the session gate can be exercised in native tests.

pub mod execution;
pub mod route_guard;
pub mod token_store;
