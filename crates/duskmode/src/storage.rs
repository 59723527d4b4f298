//! Persisted key-value storage for the preference record.
//!
//! - [`PreferenceStorage`]: The storage seam a store writes through
//! - [`MemoryStorage`]: A `HashMap` backend that never fails
//! - [`FileStorage`]: A JSON file backend that survives restarts

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// A string key-value store that outlives the process.
///
/// Implementations decide what "absent" means; a store treats a read error
/// the same as an absent value during initialization.
pub trait PreferenceStorage {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: PreferenceStorage + ?Sized> PreferenceStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-memory storage, useful for tests and for hosts without durable state.
///
/// # Example
///
/// ```rust
/// use duskmode::{MemoryStorage, PreferenceStorage};
///
/// let storage = MemoryStorage::new().with_entry("theme", "dark");
/// assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the updated storage for chaining.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a single JSON object file.
///
/// The file holds string keys mapped to string values. A missing or blank
/// file reads as empty. Every [`set`](PreferenceStorage::set) re-reads the
/// file, updates the entry, and replaces the file through a temporary sibling
/// so a crash never leaves a half-written record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates storage at `path`. Nothing is touched on disk until the first access.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|source| StorageError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(|source| {
            StorageError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage_get_absent() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("theme").unwrap(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_memory_storage_set_replaces() {
        let mut storage = MemoryStorage::new();
        storage.set("theme", "light").unwrap();
        storage.set("theme", "dark").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_boxed_storage_delegates() {
        let mut storage: Box<dyn PreferenceStorage> = Box::new(MemoryStorage::new());
        storage.set("theme", "dark").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_storage_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("prefs.json"));
        assert_eq!(storage.get("theme").unwrap(), None);
    }

    #[test]
    fn test_file_storage_blank_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "  \n").unwrap();
        let storage = FileStorage::new(&path);
        assert_eq!(storage.get("theme").unwrap(), None);
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut storage = FileStorage::new(&path);
        storage.set("theme", "dark").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_storage_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"locale": "en"}"#).unwrap();

        let mut storage = FileStorage::new(&path);
        storage.set("theme", "light").unwrap();

        assert_eq!(storage.get("locale").unwrap().as_deref(), Some("en"));
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_storage_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let mut storage = FileStorage::new(&path);
        assert!(matches!(
            storage.get("theme"),
            Err(StorageError::Malformed { .. })
        ));
        assert!(matches!(
            storage.set("theme", "dark"),
            Err(StorageError::Malformed { .. })
        ));
    }
}
