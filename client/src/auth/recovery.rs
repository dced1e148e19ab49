//! Password "recovery" for the demo site.
//!
//! INSECURE, DEMO ONLY
//! ===================
//! Profiles keep plaintext passwords in browser storage and this module hands
//! the stored password straight back to whoever types a matching email. It
//! exists so the static mock can show a recovery screen. Do not extend it or
//! reuse it anywhere real credentials exist.

#[cfg(test)]
#[path = "recovery_test.rs"]
mod recovery_test;

use super::{Field, FieldErrors, check_email};
use crate::storage::{AccountStore, KeyValueStore, StorageError};

/// Stored credentials for a matched email.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoveredCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RecoveryError {
    #[error("recovery email is invalid")]
    Invalid(FieldErrors),
    #[error("no accounts are stored")]
    NoAccounts,
    #[error("no account matches this e-mail")]
    UnknownEmail,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl RecoveryError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Invalid(_) => "Por favor, insira um e-mail válido.",
            Self::NoAccounts => "Nenhuma conta cadastrada neste navegador.",
            Self::UnknownEmail => "Nenhuma conta encontrada com este e-mail.",
            Self::Storage(_) => "Não foi possível acessar os dados salvos.",
        }
    }

    /// Whether the recovery modal should close.
    #[must_use]
    pub fn closes_modal(&self) -> bool {
        matches!(self, Self::NoAccounts)
    }
}

/// Look up the stored password for `email`.
///
/// # Errors
///
/// See [`RecoveryError`].
pub fn recover<S: KeyValueStore>(
    store: &AccountStore<S>,
    email: &str,
) -> Result<RecoveredCredentials, RecoveryError> {
    let email = email.trim();
    let mut errors = FieldErrors::default();
    check_email(&mut errors, Field::RecoveryEmail, email);
    if !errors.is_empty() {
        return Err(RecoveryError::Invalid(errors));
    }

    let users = store.users()?;
    if users.is_empty() {
        return Err(RecoveryError::NoAccounts);
    }
    let user = users
        .into_iter()
        .find(|u| u.has_email(email))
        .ok_or(RecoveryError::UnknownEmail)?;
    log::info!("[auth] revealed stored password for {email}");
    Ok(RecoveredCredentials {
        email: user.email,
        password: user.password,
    })
}
