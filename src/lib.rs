//! # gallery-web
//!
//! Leptos + WASM front-end for the image gallery. Images and the admin API
//! are served by an external backend; this crate owns the client-side admin
//! session gate: token persistence, the shared authentication flag, and the
//! route guard protecting `/admin` pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `util::token_store` wraps `localStorage`, `state::session` caches whether
//! a token exists, and `util::route_guard` reads the store directly on every
//! navigation. `net` resolves the API base URL and talks to the backend.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and mounts `App` into `<body>`.
///
/// Rendering is client-only; the bundle is served from a static
/// `index.html` next to the external backend.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("mounting gallery-web");
    leptos::mount::mount_to_body(app::App);
}
