//! Dashboard access check.
//!
//! DESIGN
//! ======
//! The check is a pure decision over storage. The render gate in
//! [`crate::components::require_session`] keeps protected content unmounted
//! until the decision is `Allow`, so a redirect never shows the page first.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::UNAUTHENTICATED_REDIRECT;
use crate::storage::{AccountStore, KeyValueStore, StorageError};

/// Site pages, identified by the final path segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Pricing,
    Login,
    Register,
    Dashboard,
    Other,
}

impl Page {
    /// Identify a page from a URL path. Legacy `.html` names map to the same
    /// pages (`/dashboard.html` is the dashboard).
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segment = path.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
        let segment = segment.to_ascii_lowercase();
        let name = segment.strip_suffix(".html").unwrap_or(&segment);
        match name {
            "" | "index" => Self::Home,
            "pricing" => Self::Pricing,
            "login" => Self::Login,
            "register" => Self::Register,
            "dashboard" => Self::Dashboard,
            _ => Self::Other,
        }
    }

    /// Route path of the page.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home | Self::Other => "/",
            Self::Pricing => "/pricing",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
        }
    }

    #[must_use]
    pub fn is_protected(self) -> bool {
        self == Self::Dashboard
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect {
        to: Page,
        /// The login flag is set but its profile is missing.
        clear_stale_session: bool,
    },
}

/// Decide whether `page` may render.
///
/// Protected pages need the login flag set to `"true"` and a stored session
/// profile; every other page is allowed.
///
/// # Errors
///
/// Propagates read failures from the backing store.
pub fn check<S: KeyValueStore>(
    store: &AccountStore<S>,
    page: Page,
) -> Result<GuardDecision, StorageError> {
    if !page.is_protected() {
        return Ok(GuardDecision::Allow);
    }
    let logged_in = store.session_flag()?;
    let has_profile = store.session_profile()?.is_some();
    log::info!("[auth] page={page:?} logged_in={logged_in} has_profile={has_profile}");

    if logged_in && has_profile {
        return Ok(GuardDecision::Allow);
    }
    Ok(GuardDecision::Redirect {
        to: UNAUTHENTICATED_REDIRECT,
        clear_stale_session: logged_in,
    })
}

/// [`check`], then act on stale sessions. Storage failures fail open.
pub fn decide<S: KeyValueStore>(store: &AccountStore<S>, page: Page) -> GuardDecision {
    let decision = match check(store, page) {
        Ok(decision) => decision,
        Err(e) => {
            log::error!("[auth] guard check failed, allowing {page:?}: {e}");
            return GuardDecision::Allow;
        }
    };
    if let GuardDecision::Redirect { to, clear_stale_session } = decision {
        log::info!("[auth] access denied, redirecting to {}", to.path());
        if clear_stale_session {
            if let Err(e) = store.clear_session() {
                log::warn!("[auth] failed to clear stale session: {e}");
            }
        }
    }
    decision
}
