//! Key-value persistence port and adapters.
//!
//! # Responsibility
//! - Define the storage contract the entry and plan stores depend on.
//! - Keep the engine testable without a real backing store.
//!
//! # Invariants
//! - Keys are opaque to adapters; scope-key construction lives in the store
//!   layer.
//! - `get` of an absent key is `Ok(None)`, never an error.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Mutex;

mod sqlite;

pub use sqlite::SqliteStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure while talking to the backing key-value store.
#[derive(Debug)]
pub enum StorageError {
    Read { key: String, message: String },
    Write { key: String, message: String },
    Schema(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { key, message } => write!(f, "failed to read key `{key}`: {message}"),
            Self::Write { key, message } => write!(f, "failed to write key `{key}`: {message}"),
            Self::Schema(message) => write!(f, "storage schema problem: {message}"),
        }
    }
}

impl Error for StorageError {}

/// Synchronous key-value persistence contract.
///
/// The production adapter wraps a SQLite table; tests and the demo binary
/// use the in-memory adapter. Values are UTF-8 JSON documents.
pub trait KvStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<T: KvStorage + ?Sized> KvStorage for &T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// In-memory adapter for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let records = self.records.lock().map_err(|err| StorageError::Read {
            key: key.to_string(),
            message: err.to_string(),
        })?;
        Ok(records.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut records = self.records.lock().map_err(|err| StorageError::Write {
            key: key.to_string(),
            message: err.to_string(),
        })?;
        records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut records = self.records.lock().map_err(|err| StorageError::Write {
            key: key.to_string(),
            message: err.to_string(),
        })?;
        records.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KvStorage, MemoryStorage};

    #[test]
    fn absent_key_reads_as_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("missing").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let storage = MemoryStorage::new();
        storage.set("entries_demo", "[]").unwrap();
        assert_eq!(storage.get("entries_demo").unwrap().as_deref(), Some("[]"));

        storage.set("entries_demo", r#"[{"x":1}]"#).unwrap();
        assert_eq!(
            storage.get("entries_demo").unwrap().as_deref(),
            Some(r#"[{"x":1}]"#)
        );
    }

    #[test]
    fn remove_is_idempotent() {
        let storage = MemoryStorage::new();
        storage.set("k", "v").unwrap();
        storage.remove("k").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }

    #[test]
    fn reference_adapter_delegates() {
        let storage = MemoryStorage::new();
        let by_ref: &MemoryStorage = &storage;
        by_ref.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }
}
