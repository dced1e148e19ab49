//! Account registration.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use super::{Field, FieldErrors, check_email, check_password};
use crate::profile::{
    DEFAULT_AVATAR, DEFAULT_BIO, DEFAULT_PHONE, UserProfile, department_for, same_email,
};
use crate::storage::{AccountStore, KeyValueStore, StorageError, USERS_KEY};

pub const TERMS_REQUIRED: &str = "Você precisa aceitar os termos de serviço.";
pub const EMAIL_TAKEN_FIELD: &str = "Este e-mail já está cadastrado.";
pub const EMAIL_TAKEN_NOTICE: &str = "E-mail já cadastrado. Faça login ou recupere a senha.";
pub const SIGNUP_SUCCESS: &str = "Cadastro efetuado! Redirecionando para o login...";

/// Raw signup form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
    pub company: String,
    pub terms_accepted: bool,
}

impl RegistrationForm {
    /// Copy with surrounding whitespace removed from text inputs. Passwords
    /// are kept verbatim.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            role: self.role.trim().to_owned(),
            company: self.company.trim().to_owned(),
            terms_accepted: self.terms_accepted,
        }
    }
}

/// Why a form was rejected before touching storage.
///
/// Field problems render inline; a missing terms acceptance is announced
/// with a notification instead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Invalid {
    pub errors: FieldErrors,
    pub terms_rejected: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("registration form is invalid")]
    Invalid(Invalid),
    #[error("an account with this e-mail already exists")]
    DuplicateEmail,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Check every rule and report all failures at once.
///
/// # Errors
///
/// Returns [`Invalid`] listing each failed rule.
pub fn validate(form: &RegistrationForm) -> Result<(), Invalid> {
    let mut errors = FieldErrors::default();
    if form.first_name.is_empty() {
        errors.push(Field::FirstName, "Por favor, insira seu nome.");
    }
    if form.last_name.is_empty() {
        errors.push(Field::LastName, "Por favor, insira seu sobrenome.");
    }
    if form.role.is_empty() {
        errors.push(Field::Role, "Por favor, selecione seu cargo.");
    }
    check_email(&mut errors, Field::Email, &form.email);
    check_password(&mut errors, &form.password, "Por favor, insira uma senha.");
    if form.password != form.confirm_password {
        errors.push(Field::ConfirmPassword, "As senhas não coincidem.");
    }

    let invalid = Invalid {
        errors,
        terms_rejected: !form.terms_accepted,
    };
    if invalid.errors.is_empty() && !invalid.terms_rejected {
        Ok(())
    } else {
        Err(invalid)
    }
}

/// Profile record for a validated form.
#[must_use]
pub fn build_profile(form: &RegistrationForm, joined_on: &str) -> UserProfile {
    let phone = if form.phone.is_empty() {
        DEFAULT_PHONE.to_owned()
    } else {
        form.phone.clone()
    };
    UserProfile {
        name: format!("{} {}", form.first_name, form.last_name),
        email: form.email.clone(),
        phone,
        password: form.password.clone(),
        role: form.role.clone(),
        department: department_for(&form.role, &form.company),
        join_date: joined_on.to_owned(),
        bio: DEFAULT_BIO.to_owned(),
        avatar: DEFAULT_AVATAR.to_owned(),
    }
}

/// Validate `form`, then append a new profile unless its email is taken.
///
/// The uniqueness check and the append run inside one
/// [`AccountStore::update_users`] transaction. If the collection cannot be
/// written the profile is saved to the legacy single-profile key instead.
/// The new profile is also mirrored to the legacy and profile-page keys and
/// its email is left in session storage for the login page.
///
/// # Errors
///
/// [`RegisterError::Invalid`] for a rejected form,
/// [`RegisterError::DuplicateEmail`] when the email exists (nothing is
/// written), or [`RegisterError::Storage`] when nothing could be persisted.
pub fn register<S: KeyValueStore>(
    store: &AccountStore<S>,
    form: &RegistrationForm,
    joined_on: &str,
) -> Result<UserProfile, RegisterError> {
    let form = form.trimmed();
    validate(&form).map_err(RegisterError::Invalid)?;
    let profile = build_profile(&form, joined_on);

    let appended = store.update_users(|users| {
        if users.iter().any(|u| same_email(&u.email, &profile.email)) {
            return Err(RegisterError::DuplicateEmail);
        }
        users.push(profile.clone());
        Ok(())
    });
    match appended {
        Ok(()) => {}
        Err(RegisterError::Storage(e @ StorageError::Write { .. })) => {
            log::warn!("could not write `{USERS_KEY}`, saving single profile: {e}");
            store.set_legacy_profile(&profile)?;
        }
        Err(e) => return Err(e),
    }

    if let Err(e) = store.set_legacy_profile(&profile) {
        log::warn!("failed to mirror legacy profile: {e}");
    }
    if let Err(e) = store.set_profile_mirror(&profile) {
        log::warn!("failed to mirror profile page record: {e}");
    }
    if let Err(e) = store.set_registered_email(&profile.email) {
        log::warn!("failed to stash registered email: {e}");
    }
    log::info!("registered {}", profile.email);
    Ok(profile)
}
