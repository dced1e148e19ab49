//! Demo account flows: registration, login, password recovery and the
//! dashboard guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing here talks to a server. Accounts live in browser storage through
//! [`crate::storage::AccountStore`], and each flow is a plain function over
//! that store so pages only handle rendering, timers and navigation.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod guard;
pub mod login;
pub mod recovery;
pub mod register;

/// Minimum password length for both registration and login.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Form inputs that can carry an inline error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    Role,
    RecoveryEmail,
}

/// Inline validation message attached to one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Every validation failure of one submission, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn push(&mut self, field: Field, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    /// First message recorded for `field`.
    #[must_use]
    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    #[must_use]
    pub fn has(&self, field: Field) -> bool {
        self.message_for(field).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

pub(crate) const INVALID_EMAIL: &str = "Por favor, insira um e-mail válido.";
pub(crate) const PASSWORD_TOO_SHORT: &str = "A senha deve ter pelo menos 8 caracteres.";

/// Email format check shared by every form.
pub(crate) fn check_email(errors: &mut FieldErrors, field: Field, email: &str) {
    if !crate::util::email::is_valid_email(email) {
        errors.push(field, INVALID_EMAIL);
    }
}

/// Required + minimum length check shared by every password input.
pub(crate) fn check_password(errors: &mut FieldErrors, password: &str, missing: &'static str) {
    if password.is_empty() {
        errors.push(Field::Password, missing);
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(Field::Password, PASSWORD_TOO_SHORT);
    }
}
