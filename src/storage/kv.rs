//! String-keyed, string-valued persistence
//!
//! The tracker only needs a tiny key-value store. `FileStore` keeps one file
//! per key in the data directory; `MemoryStore` keeps values in process and
//! backs tests and embedders that manage persistence themselves.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};

use super::file_io::{read_optional, remove_if_exists, write_atomic};

/// Minimal key-value persistence used by [`super::Storage`]
pub trait KeyValueStore {
    /// Read the value stored under `key`, None if absent
    fn get(&self, key: &str) -> TrackerResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> TrackerResult<()>;
}

/// One file per key under a directory, written atomically
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn path_for(&self, key: &str) -> TrackerResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(TrackerError::Storage(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        read_optional(self.path_for(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()> {
        write_atomic(self.path_for(key)?, value)
    }

    fn remove(&mut self, key: &str) -> TrackerResult<()> {
        remove_if_exists(self.path_for(key)?)
    }
}

/// In-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> TrackerResult<()> {
        self.values.remove(key);
        Ok(())
    }
}
