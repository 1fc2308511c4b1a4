//! Key-value storage collaborator.
//!
//! Models the browser's origin-local storage: a flat string-to-string map
//! that survives "page loads" (store instances) until explicitly cleared.
//! The cart store and auth gate are written against the [`Storage`] trait so
//! tests can inject [`MemoryStorage`] instead of touching the filesystem.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

/// Fixed storage keys shared by the storefront modules.
///
/// These are the same keys the demo pages use, so anything written here is
/// directly visible (and editable) by a player poking at the store.
pub mod keys {
    /// Key for the JSON-serialized cart line items.
    pub const CART: &str = "cart";

    /// Key for the JSON-serialized logged-in user record.
    pub const USER: &str = "user";
}

/// Storage failures.
///
/// Callers are expected to degrade rather than propagate: a read failure
/// means "no data", a write failure means "this interaction is in-memory
/// only". See the cart store for the recovery posture.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store cannot be read or written (quota, I/O, disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A string key-value store scoped to one "origin".
pub trait Storage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the backing store cannot be
    /// read at all. A missing key is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the write cannot be
    /// persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` and its value. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the removal cannot be
    /// persisted.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory storage backend.
///
/// Never fails; the map simply vanishes when the value is dropped. This is
/// the unit-test double and the fallback when no persistence is wanted.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let map = self.map.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.map.lock().unwrap_or_else(PoisonError::into_inner);
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.map.lock().unwrap_or_else(PoisonError::into_inner);
        map.remove(key);
        Ok(())
    }
}

/// File-backed storage backend.
///
/// All keys live in a single JSON object on disk, re-read and rewritten on
/// every call. That is slow and entirely fine for a demo whose writes happen
/// one click at a time; it gives the cart the "survives a reload" behavior
/// the pages rely on.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a store backed by the JSON file at `path`.
    ///
    /// The file is created on the first write; a missing file reads as an
    /// empty store.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> Result<HashMap<String, String>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(StorageError::Unavailable(e.to_string())),
        };
        serde_json::from_str(&raw).map_err(|e| StorageError::Unavailable(e.to_string()))
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<(), StorageError> {
        let raw =
            serde_json::to_string(map).map_err(|e| StorageError::Unavailable(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}
