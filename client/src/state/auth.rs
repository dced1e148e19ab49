//! Signed-in user shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser storage is the source of truth for the session. This context is
//! a reactive copy loaded once after hydration so the header and dashboard
//! can render the user's name without each touching storage.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::profile::UserProfile;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<UserProfile>,
}

impl AuthState {
    /// Greeting name, falling back to a neutral label.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .map(UserProfile::first_name)
            .filter(|n| !n.is_empty())
            .unwrap_or("Usuário")
    }
}
