//! Client timing and policy constants.

use crate::auth::guard::Page;

/// Where the guard sends visitors without a session.
pub const UNAUTHENTICATED_REDIRECT: Page = Page::Login;

/// Simulated processing time after the signup form is submitted.
pub const SIGNUP_PROCESSING_MS: u32 = 2000;
/// Pause between the signup success toast and the move to login.
pub const SIGNUP_REDIRECT_MS: u32 = 1200;
/// Simulated processing time after the login form is submitted.
pub const LOGIN_PROCESSING_MS: u32 = 2000;
/// Pause between the login result toast and the next page.
pub const LOGIN_REDIRECT_MS: u32 = 1000;
/// Delay for links that announce a page change before following it.
pub const LINK_REDIRECT_MS: u32 = 1000;
