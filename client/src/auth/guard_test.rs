use super::*;
use crate::profile::UserProfile;
use crate::storage::{LEGACY_PROFILE_KEY, LOGGED_IN_KEY, MemoryStore};

fn store() -> AccountStore<MemoryStore> {
    AccountStore::new(MemoryStore::new(), MemoryStore::new())
}

fn ana() -> UserProfile {
    UserProfile {
        name: "Ana Silva".to_owned(),
        email: "ana@x.com".to_owned(),
        password: "abcdefgh".to_owned(),
        ..UserProfile::default()
    }
}

// =============================================================
// Page identity
// =============================================================

#[test]
fn from_path_uses_final_segment() {
    assert_eq!(Page::from_path("/"), Page::Home);
    assert_eq!(Page::from_path(""), Page::Home);
    assert_eq!(Page::from_path("/dashboard"), Page::Dashboard);
    assert_eq!(Page::from_path("/site/dashboard.html"), Page::Dashboard);
    assert_eq!(Page::from_path("/index.html"), Page::Home);
    assert_eq!(Page::from_path("/login"), Page::Login);
    assert_eq!(Page::from_path("/register.html"), Page::Register);
    assert_eq!(Page::from_path("/pricing"), Page::Pricing);
    assert_eq!(Page::from_path("/blog/post"), Page::Other);
}

#[test]
fn from_path_ignores_trailing_slash_and_query() {
    assert_eq!(Page::from_path("/dashboard/"), Page::Dashboard);
    assert_eq!(Page::from_path("/dashboard?tab=tasks"), Page::Dashboard);
    assert_eq!(Page::from_path("/Dashboard.HTML"), Page::Dashboard);
    assert_eq!(Page::from_path("/DASHBOARD"), Page::Dashboard);
}

#[test]
fn only_dashboard_is_protected() {
    assert!(Page::Dashboard.is_protected());
    for page in [Page::Home, Page::Pricing, Page::Login, Page::Register, Page::Other] {
        assert!(!page.is_protected());
    }
}

// =============================================================
// Decisions
// =============================================================

#[test]
fn public_pages_always_allowed() {
    let s = store();
    assert_eq!(check(&s, Page::Home).unwrap(), GuardDecision::Allow);
    assert_eq!(check(&s, Page::Login).unwrap(), GuardDecision::Allow);
}

#[test]
fn unset_flag_redirects_from_dashboard() {
    let s = store();
    s.set_legacy_profile(&ana()).unwrap();
    assert_eq!(
        check(&s, Page::Dashboard).unwrap(),
        GuardDecision::Redirect {
            to: UNAUTHENTICATED_REDIRECT,
            clear_stale_session: false,
        }
    );
}

#[test]
fn non_literal_flag_redirects() {
    let s = store();
    s.set_legacy_profile(&ana()).unwrap();
    s.local().set(LOGGED_IN_KEY, "yes").unwrap();
    assert!(matches!(
        check(&s, Page::Dashboard).unwrap(),
        GuardDecision::Redirect { .. }
    ));
}

#[test]
fn flag_without_profile_redirects_and_clears_flag() {
    let s = store();
    s.local().set(LOGGED_IN_KEY, "true").unwrap();
    let decision = decide(&s, Page::Dashboard);
    assert_eq!(
        decision,
        GuardDecision::Redirect {
            to: UNAUTHENTICATED_REDIRECT,
            clear_stale_session: true,
        }
    );
    assert!(!s.session_flag().unwrap());
}

#[test]
fn session_allows_dashboard() {
    let s = store();
    s.set_session(&ana()).unwrap();
    assert_eq!(decide(&s, Page::Dashboard), GuardDecision::Allow);
}

#[test]
fn unreadable_flag_fails_open() {
    let s = store();
    s.local().reject_reads_to(LOGGED_IN_KEY);
    assert!(matches!(check(&s, Page::Dashboard), Err(StorageError::Read { .. })));
    assert_eq!(decide(&s, Page::Dashboard), GuardDecision::Allow);
}

#[test]
fn unreadable_profile_fails_open() {
    let s = store();
    s.set_session(&ana()).unwrap();
    s.local().reject_reads_to(LEGACY_PROFILE_KEY);
    assert_eq!(decide(&s, Page::Dashboard), GuardDecision::Allow);
}
