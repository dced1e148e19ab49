//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages compose reusable components and own the per-form signals, timers
//! and navigation for each route.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod pricing;
pub mod register;
