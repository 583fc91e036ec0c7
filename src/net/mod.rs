//! Networking modules for the gallery backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` resolves the base URL, `api` builds and sends requests, and
//! `types` defines the admin wire schema.

pub mod api;
pub mod config;
pub mod types;
