use super::*;

#[test]
fn empty_password_is_neutral() {
    assert_eq!(PasswordStrength::of(""), PasswordStrength::Empty);
    assert_eq!(PasswordStrength::Empty.label(), "Força da senha");
}

#[test]
fn score_counts_each_rule_once() {
    assert_eq!(score("abc"), 1);
    assert_eq!(score("abcdefgh"), 2);
    assert_eq!(score("Abcdefgh1"), 4);
    assert_eq!(score("Abcdefgh1!xy"), 6);
}

#[test]
fn classification_buckets() {
    assert_eq!(PasswordStrength::of("abcdefgh"), PasswordStrength::Weak);
    assert_eq!(PasswordStrength::of("Abcdefgh1"), PasswordStrength::Medium);
    assert_eq!(PasswordStrength::of("Abcdefgh1!"), PasswordStrength::Strong);
    assert_eq!(PasswordStrength::of("Abcdefgh1!xy"), PasswordStrength::VeryStrong);
}

#[test]
fn css_class_marks_level() {
    assert_eq!(
        PasswordStrength::Weak.css_class(),
        "password-strength strength-weak"
    );
}
