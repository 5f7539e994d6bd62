//! Durable key/value storage seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser front-end backs this with `localStorage`, the terminal client
//! with a JSON file, and tests with [`MemoryStorage`]. Absence of a key is a
//! normal `Ok(None)`, never an error.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use crate::error::StorageError;

/// Key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Key holding the role marker (`"Admin"` or `"User"`).
pub const ROLE_KEY: &str = "role";

/// Synchronous, process-local string map that survives reloads.
pub trait Storage {
    /// Read `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the removal.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage with no persistence beyond the value itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed storage with existing entries, as if left over from a previous run.
    #[must_use]
    pub fn with_items<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}
