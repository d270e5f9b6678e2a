//! Key-value blob persistence
//!
//! The ledger is persisted as a single text blob under one key. [`BlobStore`]
//! is the seam between the ledger and whatever holds the bytes.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::error::{IncomeError, IncomeResult};

use super::file_io::{read_optional, write_atomic};

/// A string blob store addressed by key
pub trait BlobStore {
    /// Fetch the blob stored under `key`, or `None` if nothing is stored
    fn get(&self, key: &str) -> IncomeResult<Option<String>>;

    /// Replace the blob stored under `key`
    fn set(&self, key: &str, value: &str) -> IncomeResult<()>;
}

/// Blob store keeping one `<key>.json` file per key in a directory
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> IncomeResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(IncomeError::Storage(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> IncomeResult<Option<String>> {
        read_optional(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> IncomeResult<()> {
        write_atomic(self.path_for(key)?, value)
    }
}

/// In-memory blob store; clones share the same contents
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> IncomeResult<Option<String>> {
        let blobs = self.blobs.read().map_err(|e| {
            IncomeError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(blobs.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> IncomeResult<()> {
        let mut blobs = self.blobs.write().map_err(|e| {
            IncomeError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
