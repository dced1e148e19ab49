//! Typed access to browser key-value storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page reads and writes the same handful of `localStorage` and
//! `sessionStorage` keys. All of that traffic goes through [`AccountStore`]
//! so the key names, JSON shapes and read-modify-write sequences live in one
//! place instead of being repeated per page.
//!
//! DESIGN
//! ======
//! [`KeyValueStore`] is the seam between the typed layer and the backing
//! store: [`BrowserStore`](browser::BrowserStore) wraps `web_sys::Storage` in
//! hydrate builds and [`MemoryStore`] backs tests and non-browser renders.

#[cfg(feature = "hydrate")]
pub mod browser;
mod accounts;
mod memory;

pub use accounts::{
    AccountStore, LEGACY_PROFILE_KEY, LOGGED_IN_KEY, LOGGED_IN_VALUE, PROFILE_MIRROR_KEY,
    REGISTERED_EMAIL_KEY, REMEMBERED_EMAIL_KEY, USERS_KEY,
};
pub use memory::MemoryStore;

#[cfg(feature = "hydrate")]
pub use browser::{BrowserStore as PageStore, open_accounts};

/// Store type behind [`open_accounts`] outside the browser.
#[cfg(not(feature = "hydrate"))]
pub type PageStore = MemoryStore;

/// Browser storage is only reachable after hydration.
///
/// # Errors
///
/// Always returns [`StorageError::Unavailable`].
#[cfg(not(feature = "hydrate"))]
pub fn open_accounts() -> Result<AccountStore<PageStore>, StorageError> {
    Err(StorageError::Unavailable)
}

/// Failure while talking to a key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable in this environment")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to encode `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value store with `Storage`-like semantics.
///
/// Methods take `&self`: browser storage is shared mutable state owned by
/// the page, so implementations use interior mutability.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the backing store rejects the read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the backing store rejects the write
    /// (quota exceeded, private mode, ...).
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the backing store rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
