use super::*;
use crate::storage::{LEGACY_PROFILE_KEY, MemoryStore, PROFILE_MIRROR_KEY, USERS_KEY};

fn store() -> AccountStore<MemoryStore> {
    AccountStore::new(MemoryStore::new(), MemoryStore::new())
}

fn ana_form() -> RegistrationForm {
    RegistrationForm {
        first_name: "Ana".to_owned(),
        last_name: "Silva".to_owned(),
        email: "ana@x.com".to_owned(),
        password: "abcdefgh".to_owned(),
        confirm_password: "abcdefgh".to_owned(),
        role: "Desenvolvedor".to_owned(),
        terms_accepted: true,
        ..RegistrationForm::default()
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_form_passes() {
    assert_eq!(validate(&ana_form()), Ok(()));
}

#[test]
fn empty_form_reports_every_field_and_terms() {
    let invalid = validate(&RegistrationForm::default()).unwrap_err();
    for field in [Field::FirstName, Field::LastName, Field::Role, Field::Email, Field::Password] {
        assert!(invalid.errors.has(field), "missing error for {field:?}");
    }
    assert!(!invalid.errors.has(Field::ConfirmPassword));
    assert!(invalid.terms_rejected);
}

#[test]
fn short_password_is_rejected() {
    let form = RegistrationForm {
        password: "abc1234".to_owned(),
        confirm_password: "abc1234".to_owned(),
        ..ana_form()
    };
    let invalid = validate(&form).unwrap_err();
    assert_eq!(
        invalid.errors.message_for(Field::Password),
        Some("A senha deve ter pelo menos 8 caracteres.")
    );
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let form = RegistrationForm {
        confirm_password: "abcdefgX".to_owned(),
        ..ana_form()
    };
    let invalid = validate(&form).unwrap_err();
    assert!(invalid.errors.has(Field::ConfirmPassword));
    assert!(!invalid.terms_rejected);
}

#[test]
fn terms_only_failure_has_no_field_errors() {
    let form = RegistrationForm {
        terms_accepted: false,
        ..ana_form()
    };
    let invalid = validate(&form).unwrap_err();
    assert!(invalid.errors.is_empty());
    assert!(invalid.terms_rejected);
}

// =============================================================
// Profile synthesis
// =============================================================

#[test]
fn build_profile_fills_defaults() {
    let profile = build_profile(&ana_form(), "05/12/2025");
    assert_eq!(profile.name, "Ana Silva");
    assert_eq!(profile.department, "TI");
    assert_eq!(profile.phone, DEFAULT_PHONE);
    assert_eq!(profile.join_date, "05/12/2025");
    assert_eq!(profile.bio, DEFAULT_BIO);
    assert!(profile.avatar.starts_with("data:image/svg+xml"));
}

#[test]
fn build_profile_uses_company_for_unknown_role() {
    let form = RegistrationForm {
        role: "Estagiário".to_owned(),
        company: "ACME".to_owned(),
        phone: "(21) 3333-4444".to_owned(),
        ..ana_form()
    };
    let profile = build_profile(&form, "01/01/2026");
    assert_eq!(profile.department, "ACME");
    assert_eq!(profile.phone, "(21) 3333-4444");
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn register_persists_and_mirrors() {
    let s = store();
    let profile = register(&s, &ana_form(), "05/12/2025").unwrap();
    assert_eq!(profile.department, "TI");
    assert_eq!(s.users().unwrap(), vec![profile.clone()]);
    assert_eq!(s.legacy_profile().unwrap(), Some(profile.clone()));
    assert!(s.local().get(PROFILE_MIRROR_KEY).unwrap().is_some());
    assert_eq!(s.take_registered_email().unwrap().as_deref(), Some("ana@x.com"));
}

#[test]
fn register_trims_inputs() {
    let s = store();
    let form = RegistrationForm {
        first_name: "  Ana ".to_owned(),
        email: " ana@x.com ".to_owned(),
        ..ana_form()
    };
    let profile = register(&s, &form, "05/12/2025").unwrap();
    assert_eq!(profile.name, "Ana Silva");
    assert_eq!(profile.email, "ana@x.com");
}

#[test]
fn duplicate_email_is_rejected_case_insensitively() {
    let s = store();
    register(&s, &ana_form(), "05/12/2025").unwrap();
    let again = RegistrationForm {
        email: "ANA@X.com".to_owned(),
        first_name: "Outra".to_owned(),
        ..ana_form()
    };
    let err = register(&s, &again, "06/12/2025").unwrap_err();
    assert!(matches!(err, RegisterError::DuplicateEmail));
    assert_eq!(s.users().unwrap().len(), 1);
    assert_eq!(s.legacy_profile().unwrap().unwrap().name, "Ana Silva");
}

#[test]
fn duplicate_check_covers_legacy_only_store() {
    let s = store();
    let legacy = build_profile(&ana_form(), "01/01/2024");
    s.set_legacy_profile(&legacy).unwrap();
    let err = register(&s, &ana_form(), "05/12/2025").unwrap_err();
    assert!(matches!(err, RegisterError::DuplicateEmail));
    assert_eq!(s.local().get(USERS_KEY).unwrap(), None);
}

#[test]
fn short_password_persists_nothing() {
    let s = store();
    let form = RegistrationForm {
        password: "short".to_owned(),
        confirm_password: "short".to_owned(),
        ..ana_form()
    };
    let err = register(&s, &form, "05/12/2025").unwrap_err();
    match err {
        RegisterError::Invalid(invalid) => assert!(invalid.errors.has(Field::Password)),
        other => panic!("expected invalid form, got {other:?}"),
    }
    assert!(s.local().is_empty());
    assert!(s.session().is_empty());
}

#[test]
fn collection_write_failure_falls_back_to_single_profile() {
    let s = store();
    s.local().reject_writes_to(USERS_KEY);
    let profile = register(&s, &ana_form(), "05/12/2025").unwrap();
    assert_eq!(s.local().get(USERS_KEY).unwrap(), None);
    assert!(s.local().get(LEGACY_PROFILE_KEY).unwrap().is_some());
    assert_eq!(s.users().unwrap(), vec![profile]);
}

#[test]
fn total_write_failure_is_reported() {
    let s = store();
    s.local().reject_writes_to(USERS_KEY);
    s.local().reject_writes_to(LEGACY_PROFILE_KEY);
    let err = register(&s, &ana_form(), "05/12/2025").unwrap_err();
    assert!(matches!(err, RegisterError::Storage(StorageError::Write { .. })));
}

#[test]
fn unreadable_collection_is_reported_and_nothing_written() {
    let s = store();
    s.local().reject_reads_to(USERS_KEY);
    let err = register(&s, &ana_form(), "05/12/2025").unwrap_err();
    assert!(matches!(err, RegisterError::Storage(StorageError::Read { .. })));
    assert!(s.local().is_empty());
}
