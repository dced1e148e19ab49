//! Typed account, session and prefill storage.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{KeyValueStore, StorageError};
use crate::profile::UserProfile;

/// Ordered list of every registered profile.
pub const USERS_KEY: &str = "flowpilot_users";
/// Single-profile key from before the collection existed. Also holds the
/// profile of the logged-in user.
pub const LEGACY_PROFILE_KEY: &str = "flowpilot_user";
/// Copy of the last registered profile read by the profile page.
pub const PROFILE_MIRROR_KEY: &str = "flowpilot_perfil";
pub const LOGGED_IN_KEY: &str = "flowpilot_logged_in";
pub const LOGGED_IN_VALUE: &str = "true";
pub const REMEMBERED_EMAIL_KEY: &str = "rememberedEmail";
/// Session-scoped email handed from the register page to the login page.
pub const REGISTERED_EMAIL_KEY: &str = "registeredEmail";

/// Account storage over a persistent (`local`) and a tab-scoped (`session`)
/// store.
#[derive(Debug)]
pub struct AccountStore<S> {
    local: S,
    session: S,
}

impl<S: KeyValueStore> AccountStore<S> {
    pub fn new(local: S, session: S) -> Self {
        Self { local, session }
    }

    pub fn local(&self) -> &S {
        &self.local
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    // =========================================================================
    // USER COLLECTION
    // =========================================================================

    /// Every stored profile, oldest first.
    ///
    /// Falls back to the legacy single-profile key when the collection has
    /// never been written.
    ///
    /// # Errors
    ///
    /// Propagates read failures from the backing store.
    pub fn users(&self) -> Result<Vec<UserProfile>, StorageError> {
        if let Some(raw) = self.local.get(USERS_KEY)? {
            return Ok(decode_or_default(USERS_KEY, &raw));
        }
        Ok(self.legacy_profile()?.into_iter().collect())
    }

    /// Overwrite the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the write fails.
    pub fn save_users(&self, users: &[UserProfile]) -> Result<(), StorageError> {
        write_json(&self.local, USERS_KEY, users)
    }

    /// Read-modify-write the collection in one synchronous step.
    ///
    /// `apply` runs between the read and the write with no yield point, so
    /// two handlers in the same tab cannot interleave. When `apply` returns
    /// `Err` nothing is written.
    ///
    /// # Errors
    ///
    /// Returns the error from `apply`, or a storage error converted into `E`.
    pub fn update_users<T, E>(
        &self,
        apply: impl FnOnce(&mut Vec<UserProfile>) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<StorageError>,
    {
        let mut users = self.users()?;
        let out = apply(&mut users)?;
        self.save_users(&users)?;
        Ok(out)
    }

    // =========================================================================
    // LEGACY PROFILE + MIRROR
    // =========================================================================

    /// Profile stored under the legacy single-profile key.
    ///
    /// # Errors
    ///
    /// Propagates read failures from the backing store.
    pub fn legacy_profile(&self) -> Result<Option<UserProfile>, StorageError> {
        let Some(raw) = self.local.get(LEGACY_PROFILE_KEY)? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Ok(decode(LEGACY_PROFILE_KEY, &raw))
    }

    /// # Errors
    ///
    /// Returns an error if encoding or the write fails.
    pub fn set_legacy_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        write_json(&self.local, LEGACY_PROFILE_KEY, profile)
    }

    /// # Errors
    ///
    /// Returns an error if encoding or the write fails.
    pub fn set_profile_mirror(&self, profile: &UserProfile) -> Result<(), StorageError> {
        write_json(&self.local, PROFILE_MIRROR_KEY, profile)
    }

    // =========================================================================
    // SESSION
    // =========================================================================

    /// Whether the login flag holds the literal `"true"`.
    ///
    /// # Errors
    ///
    /// Propagates read failures from the backing store.
    pub fn session_flag(&self) -> Result<bool, StorageError> {
        Ok(self.local.get(LOGGED_IN_KEY)?.as_deref() == Some(LOGGED_IN_VALUE))
    }

    /// Profile of the logged-in user.
    ///
    /// # Errors
    ///
    /// Propagates read failures from the backing store.
    pub fn session_profile(&self) -> Result<Option<UserProfile>, StorageError> {
        self.legacy_profile()
    }

    /// Mark `profile` as logged in.
    ///
    /// The profile is written before the flag, so a failed profile write
    /// never leaves the flag pointing at someone else's record.
    ///
    /// # Errors
    ///
    /// Returns an error if either write fails.
    pub fn set_session(&self, profile: &UserProfile) -> Result<(), StorageError> {
        self.set_legacy_profile(profile)?;
        self.local.set(LOGGED_IN_KEY, LOGGED_IN_VALUE)
    }

    /// Drop the login flag. The profile stays behind as the legacy record.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal fails.
    pub fn clear_session(&self) -> Result<(), StorageError> {
        self.local.remove(LOGGED_IN_KEY)
    }

    // =========================================================================
    // EMAIL PREFILL
    // =========================================================================

    /// # Errors
    ///
    /// Propagates read failures from the backing store.
    pub fn remembered_email(&self) -> Result<Option<String>, StorageError> {
        Ok(self.local.get(REMEMBERED_EMAIL_KEY)?.filter(|e| !e.is_empty()))
    }

    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn set_remembered_email(&self, email: &str) -> Result<(), StorageError> {
        self.local.set(REMEMBERED_EMAIL_KEY, email)
    }

    /// # Errors
    ///
    /// Returns an error if the removal fails.
    pub fn clear_remembered_email(&self) -> Result<(), StorageError> {
        self.local.remove(REMEMBERED_EMAIL_KEY)
    }

    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn set_registered_email(&self, email: &str) -> Result<(), StorageError> {
        self.session.set(REGISTERED_EMAIL_KEY, email)
    }

    /// Read and delete the email left by the register page.
    ///
    /// # Errors
    ///
    /// Propagates read or removal failures from the session store.
    pub fn take_registered_email(&self) -> Result<Option<String>, StorageError> {
        let email = self.session.get(REGISTERED_EMAIL_KEY)?;
        if email.is_some() {
            self.session.remove(REGISTERED_EMAIL_KEY)?;
        }
        Ok(email.filter(|e| !e.is_empty()))
    }
}

fn write_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: KeyValueStore,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_owned(),
        source,
    })?;
    store.set(key, &raw)
}

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring unparsable `{key}`: {e}");
            None
        }
    }
}

fn decode_or_default<T: DeserializeOwned + Default>(key: &str, raw: &str) -> T {
    decode(key, raw).unwrap_or_default()
}
