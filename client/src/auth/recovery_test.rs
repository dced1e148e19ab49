use super::*;
use crate::profile::UserProfile;
use crate::storage::MemoryStore;

fn store_with(users: &[UserProfile]) -> AccountStore<MemoryStore> {
    let s = AccountStore::new(MemoryStore::new(), MemoryStore::new());
    if !users.is_empty() {
        s.save_users(users).unwrap();
    }
    s
}

fn ana() -> UserProfile {
    UserProfile {
        name: "Ana Silva".to_owned(),
        email: "ana@x.com".to_owned(),
        password: "abcdefgh".to_owned(),
        ..UserProfile::default()
    }
}

#[test]
fn invalid_email_is_a_field_error() {
    let err = recover(&store_with(&[ana()]), "ana@").unwrap_err();
    match err {
        RecoveryError::Invalid(errors) => assert!(errors.has(Field::RecoveryEmail)),
        other => panic!("expected invalid email, got {other:?}"),
    }
}

#[test]
fn empty_store_closes_modal() {
    let err = recover(&store_with(&[]), "ana@x.com").unwrap_err();
    assert!(matches!(err, RecoveryError::NoAccounts));
    assert!(err.closes_modal());
}

#[test]
fn unknown_email_keeps_modal_open() {
    let err = recover(&store_with(&[ana()]), "bia@x.com").unwrap_err();
    assert!(matches!(err, RecoveryError::UnknownEmail));
    assert!(!err.closes_modal());
}

#[test]
fn match_returns_stored_credentials() {
    let creds = recover(&store_with(&[ana()]), " ANA@X.COM ").unwrap();
    assert_eq!(
        creds,
        RecoveredCredentials {
            email: "ana@x.com".to_owned(),
            password: "abcdefgh".to_owned(),
        }
    );
}

#[test]
fn legacy_profile_is_searched() {
    let s = store_with(&[]);
    s.set_legacy_profile(&ana()).unwrap();
    assert_eq!(recover(&s, "ana@x.com").unwrap().password, "abcdefgh");
}
