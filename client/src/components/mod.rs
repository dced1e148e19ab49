//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and shared dialogs while reading/writing
//! state from Leptos context providers.

pub mod faq;
pub mod form_field;
pub mod recovery_modal;
pub mod require_session;
pub mod site_footer;
pub mod site_header;
pub mod toast_stack;
