//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State values are plain structs; `App` wraps them in `RwSignal` and
//! provides them as context so components share one instance.

pub mod session;
