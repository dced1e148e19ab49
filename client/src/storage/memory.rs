//! In-process [`KeyValueStore`] used by tests and non-browser renders.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use super::{KeyValueStore, StorageError};

/// `HashMap`-backed store. Writes to keys registered with
/// [`MemoryStore::reject_writes_to`] fail like a full quota; reads of keys
/// registered with [`MemoryStore::reject_reads_to`] fail like a blocked
/// storage area.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    rejected: RefCell<HashSet<String>>,
    unreadable: RefCell<HashSet<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write or removal of `key` fail.
    pub fn reject_writes_to(&self, key: &str) {
        self.rejected.borrow_mut().insert(key.to_owned());
    }

    /// Make every subsequent read of `key` fail.
    pub fn reject_reads_to(&self, key: &str) {
        self.unreadable.borrow_mut().insert(key.to_owned());
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn check_writable(&self, key: &str) -> Result<(), StorageError> {
        if self.rejected.borrow().contains(key) {
            return Err(StorageError::Write {
                key: key.to_owned(),
                reason: "quota exceeded".to_owned(),
            });
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unreadable.borrow().contains(key) {
            return Err(StorageError::Read {
                key: key.to_owned(),
                reason: "access denied".to_owned(),
            });
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_writable(key)?;
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check_writable(key)?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
