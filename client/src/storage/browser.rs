//! `web_sys::Storage` adapter. Hydrate builds only.

use super::{AccountStore, KeyValueStore, StorageError};

/// Handle to `window.localStorage` or `window.sessionStorage`.
#[derive(Clone, Debug)]
pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    /// Open `window.localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when there is no window or the
    /// browser denies storage access.
    pub fn local() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }

    /// Open `window.sessionStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when there is no window or the
    /// browser denies storage access.
    pub fn session() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.session_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_owned(),
            reason: format!("{e:?}"),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_owned(),
            reason: format!("{e:?}"),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(|e| StorageError::Write {
            key: key.to_owned(),
            reason: format!("{e:?}"),
        })
    }
}

/// Open the account store over the page's local and session storage.
///
/// # Errors
///
/// Returns [`StorageError::Unavailable`] if either storage area is missing.
pub fn open_accounts() -> Result<AccountStore<BrowserStore>, StorageError> {
    Ok(AccountStore::new(BrowserStore::local()?, BrowserStore::session()?))
}
