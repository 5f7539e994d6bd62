//! Session storage backed by a JSON object on disk.
//!
//! The whole file is read on every access and rewritten on every change, so
//! two invocations never disagree about the session for longer than one
//! command.

#[cfg(test)]
#[path = "file_storage_test.rs"]
mod file_storage_test;

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use auth::{Storage, StorageError};

enum LoadError {
    Corrupt(String),
    Io(String),
}

impl LoadError {
    fn into_message(self) -> String {
        match self {
            Self::Corrupt(message) | Self::Io(message) => message,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty map.
    fn load(&self) -> Result<BTreeMap<String, String>, LoadError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| LoadError::Corrupt(e.to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(LoadError::Io(e.to_string())),
        }
    }

    fn save(&self, items: &BTreeMap<String, String>) -> Result<(), String> {
        let rendered = serde_json::to_string_pretty(items).map_err(|e| e.to_string())?;
        std::fs::write(&self.path, rendered).map_err(|e| e.to_string())
    }

    fn modify(&self, key: &str, apply: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<(), StorageError> {
        let write_error = |message: String| StorageError::Write {
            key: key.to_owned(),
            message,
        };
        // A corrupt file is replaced so sign-in and sign-out can repair it.
        let mut items = match self.load() {
            Ok(items) => items,
            Err(LoadError::Corrupt(message)) => {
                tracing::warn!(path = %self.path.display(), %message, "overwriting corrupt session file");
                BTreeMap::new()
            }
            Err(LoadError::Io(message)) => return Err(write_error(message)),
        };
        apply(&mut items);
        self.save(&items).map_err(write_error)
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut items = self.load().map_err(|e| StorageError::Read {
            key: key.to_owned(),
            message: e.into_message(),
        })?;
        Ok(items.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.modify(key, |items| {
            items.insert(key.to_owned(), value.to_owned());
        })
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if !self.path.exists() {
            return Ok(());
        }
        self.modify(key, |items| {
            items.remove(key);
        })
    }
}
