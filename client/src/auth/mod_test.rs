use super::*;

#[test]
fn field_errors_keep_first_message_per_field() {
    let mut errors = FieldErrors::default();
    errors.push(Field::Email, "a");
    errors.push(Field::Email, "b");
    assert_eq!(errors.message_for(Field::Email), Some("a"));
    assert_eq!(errors.len(), 2);
    assert!(!errors.has(Field::Password));
}

#[test]
fn check_password_distinguishes_missing_and_short() {
    let mut errors = FieldErrors::default();
    check_password(&mut errors, "", "missing");
    assert_eq!(errors.message_for(Field::Password), Some("missing"));

    let mut errors = FieldErrors::default();
    check_password(&mut errors, "1234567", "missing");
    assert_eq!(errors.message_for(Field::Password), Some(PASSWORD_TOO_SHORT));

    let mut errors = FieldErrors::default();
    check_password(&mut errors, "12345678", "missing");
    assert!(errors.is_empty());
}

#[test]
fn check_email_uses_requested_field() {
    let mut errors = FieldErrors::default();
    check_email(&mut errors, Field::RecoveryEmail, "nope");
    assert_eq!(errors.message_for(Field::RecoveryEmail), Some(INVALID_EMAIL));
}
