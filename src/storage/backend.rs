//! Key-value storage backends
//!
//! The store persists each entity under one fixed key. Backends only move
//! strings; encoding is the store's job.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::trace;

use crate::error::TrackerError;

use super::file_io::{read_optional, write_atomic};

/// Synchronous key-value persistence used by [`super::ExpenseStore`]
pub trait StorageBackend {
    /// Read the value stored under `key`, `None` if nothing was stored yet
    fn get(&self, key: &str) -> Result<Option<String>, TrackerError>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), TrackerError>;
}

/// Stores each key in its own file, `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf, TrackerError> {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(TrackerError::Storage(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, TrackerError> {
        let path = self.path_for(key)?;
        trace!(path = %path.display(), "Reading key");
        read_optional(path)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), TrackerError> {
        let path = self.path_for(key)?;
        trace!(path = %path.display(), bytes = value.len(), "Writing key");
        write_atomic(path, value)
    }
}

/// In-process backend; nothing survives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a backend with existing entries
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw stored value, for inspection
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, TrackerError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), TrackerError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
