//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `notifications`, `chrome`, etc.) so
//! components depend on small focused models. Each is a plain struct that
//! `App` wraps in an `RwSignal` and provides as context.

pub mod auth;
pub mod chrome;
pub mod notifications;
pub mod pricing;
pub mod tasks;
pub mod ui;
