//! Credential check against stored profiles.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::guard::Page;
use super::{Field, FieldErrors, check_email, check_password};
use crate::profile::UserProfile;
use crate::storage::{AccountStore, KeyValueStore, StorageError};

pub const LOGIN_SUCCESS: &str = "Login realizado com sucesso!";

/// Raw login form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("login form is invalid")]
    Invalid(FieldErrors),
    #[error("no accounts are stored")]
    NoAccounts,
    #[error("no account matches this e-mail")]
    UnknownEmail,
    #[error("password does not match")]
    WrongPassword,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl LoginError {
    /// Notification text for the user.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Invalid(_) => "Verifique os campos destacados.",
            Self::NoAccounts => "Nenhuma conta cadastrada. Crie sua conta para continuar.",
            Self::UnknownEmail => "E-mail não encontrado. Cadastre-se para continuar.",
            Self::WrongPassword => "Senha incorreta. Tente novamente.",
            Self::Storage(_) => "Não foi possível acessar os dados salvos.",
        }
    }

    /// Page to send the user to after the notification, if any.
    #[must_use]
    pub fn redirect(&self) -> Option<Page> {
        match self {
            Self::NoAccounts | Self::UnknownEmail => Some(Page::Register),
            Self::Invalid(_) | Self::WrongPassword | Self::Storage(_) => None,
        }
    }
}

/// # Errors
///
/// Returns every failed field rule.
pub fn validate(form: &LoginForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    check_email(&mut errors, Field::Email, form.email.trim());
    check_password(&mut errors, &form.password, "Por favor, insira sua senha.");
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate `form`, look the email up and compare passwords.
///
/// On success the session flag and profile are written and the remembered
/// email is set or cleared to match `form.remember`. On any failure the
/// session is left untouched.
///
/// # Errors
///
/// See [`LoginError`].
pub fn login<S: KeyValueStore>(
    store: &AccountStore<S>,
    form: &LoginForm,
) -> Result<UserProfile, LoginError> {
    validate(form).map_err(LoginError::Invalid)?;
    let email = form.email.trim();

    let users = store.users()?;
    if users.is_empty() {
        log::info!("[auth] login attempt with no stored accounts");
        return Err(LoginError::NoAccounts);
    }
    let user = users
        .into_iter()
        .find(|u| u.has_email(email))
        .ok_or(LoginError::UnknownEmail)?;
    if user.password != form.password {
        log::info!("[auth] wrong password for {email}");
        return Err(LoginError::WrongPassword);
    }

    store.set_session(&user)?;
    let remembered = if form.remember {
        store.set_remembered_email(email)
    } else {
        store.clear_remembered_email()
    };
    if let Err(e) = remembered {
        log::warn!("failed to update remembered email: {e}");
    }
    log::info!("[auth] logged in {email}");
    Ok(user)
}

/// Initial login form values.
///
/// A freshly registered email (consumed) wins over the remembered one; only
/// the remembered email turns "remember me" on.
#[must_use]
pub fn prefill<S: KeyValueStore>(store: &AccountStore<S>) -> LoginForm {
    let registered = store.take_registered_email().unwrap_or_else(|e| {
        log::warn!("failed to read registered email: {e}");
        None
    });
    if let Some(email) = registered {
        return LoginForm {
            email,
            ..LoginForm::default()
        };
    }
    match store.remembered_email() {
        Ok(Some(email)) => LoginForm {
            email,
            remember: true,
            ..LoginForm::default()
        },
        Ok(None) => LoginForm::default(),
        Err(e) => {
            log::warn!("failed to read remembered email: {e}");
            LoginForm::default()
        }
    }
}
