//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod browser;
pub mod clock;
pub mod email;
pub mod format;
pub mod notify;
pub mod password_strength;
pub mod phone_mask;
pub mod timer;
