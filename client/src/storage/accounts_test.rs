use super::*;
use crate::storage::MemoryStore;

fn store() -> AccountStore<MemoryStore> {
    AccountStore::new(MemoryStore::new(), MemoryStore::new())
}

fn profile(email: &str) -> UserProfile {
    UserProfile {
        name: "Ana Silva".to_owned(),
        email: email.to_owned(),
        password: "abcdefgh".to_owned(),
        ..UserProfile::default()
    }
}

// =============================================================
// Collection
// =============================================================

#[test]
fn users_empty_when_nothing_stored() {
    assert!(store().users().unwrap().is_empty());
}

#[test]
fn users_falls_back_to_legacy_profile() {
    let s = store();
    s.set_legacy_profile(&profile("ana@x.com")).unwrap();
    let users = s.users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "ana@x.com");
}

#[test]
fn users_prefers_collection_over_legacy() {
    let s = store();
    s.set_legacy_profile(&profile("legacy@x.com")).unwrap();
    s.save_users(&[profile("a@x.com"), profile("b@x.com")]).unwrap();
    let emails: Vec<_> = s.users().unwrap().into_iter().map(|u| u.email).collect();
    assert_eq!(emails, vec!["a@x.com", "b@x.com"]);
}

#[test]
fn users_unparsable_collection_is_empty() {
    let s = store();
    s.local().set(USERS_KEY, "not json").unwrap();
    assert!(s.users().unwrap().is_empty());
}

#[test]
fn update_users_writes_on_ok() {
    let s = store();
    let len = s
        .update_users(|users| {
            users.push(profile("a@x.com"));
            Ok::<_, StorageError>(users.len())
        })
        .unwrap();
    assert_eq!(len, 1);
    assert_eq!(s.users().unwrap().len(), 1);
}

#[test]
fn update_users_skips_write_on_err() {
    #[derive(Debug)]
    enum Abort {
        Stop,
        Storage,
    }
    impl From<StorageError> for Abort {
        fn from(_: StorageError) -> Self {
            Abort::Storage
        }
    }

    let s = store();
    let result = s.update_users(|users| {
        users.push(profile("a@x.com"));
        Err::<(), _>(Abort::Stop)
    });
    assert!(matches!(result, Err(Abort::Stop)));
    assert_eq!(s.local().get(USERS_KEY).unwrap(), None);
}

#[test]
fn update_users_surfaces_write_failure() {
    let s = store();
    s.local().reject_writes_to(USERS_KEY);
    let result = s.update_users(|users| {
        users.push(profile("a@x.com"));
        Ok::<_, StorageError>(())
    });
    assert!(matches!(result, Err(StorageError::Write { .. })));
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_flag_requires_literal_true() {
    let s = store();
    assert!(!s.session_flag().unwrap());
    s.local().set(LOGGED_IN_KEY, "1").unwrap();
    assert!(!s.session_flag().unwrap());
    s.local().set(LOGGED_IN_KEY, "true").unwrap();
    assert!(s.session_flag().unwrap());
}

#[test]
fn set_session_stores_flag_and_profile() {
    let s = store();
    s.set_session(&profile("ana@x.com")).unwrap();
    assert!(s.session_flag().unwrap());
    assert_eq!(s.session_profile().unwrap().unwrap().email, "ana@x.com");
}

#[test]
fn clear_session_keeps_profile() {
    let s = store();
    s.set_session(&profile("ana@x.com")).unwrap();
    s.clear_session().unwrap();
    assert!(!s.session_flag().unwrap());
    assert!(s.session_profile().unwrap().is_some());
}

#[test]
fn blank_legacy_profile_is_absent() {
    let s = store();
    s.local().set(LEGACY_PROFILE_KEY, "  ").unwrap();
    assert!(s.legacy_profile().unwrap().is_none());
}

// =============================================================
// Prefill
// =============================================================

#[test]
fn remembered_email_round_trip() {
    let s = store();
    s.set_remembered_email("ana@x.com").unwrap();
    assert_eq!(s.remembered_email().unwrap().as_deref(), Some("ana@x.com"));
    s.clear_remembered_email().unwrap();
    assert_eq!(s.remembered_email().unwrap(), None);
}

#[test]
fn take_registered_email_consumes_value() {
    let s = store();
    s.set_registered_email("ana@x.com").unwrap();
    assert_eq!(s.take_registered_email().unwrap().as_deref(), Some("ana@x.com"));
    assert_eq!(s.take_registered_email().unwrap(), None);
    assert!(s.local().is_empty());
}
