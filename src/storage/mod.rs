//! Storage layer for IncomeFlow
//!
//! The ledger is persisted as one JSON blob in a key-value [`BlobStore`].
//! [`FileBlobStore`] keeps blobs as files under the data directory with
//! atomic writes; [`MemoryBlobStore`] keeps them in memory.

pub mod blob;
pub mod file_io;
pub mod ledger;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use file_io::{read_optional, write_atomic};
pub use ledger::{LedgerStore, LEDGER_KEY};

use crate::config::paths::IncomePaths;
use crate::error::IncomeError;

/// Open the ledger kept under the configured data directory
pub fn open_ledger(paths: &IncomePaths) -> Result<LedgerStore, IncomeError> {
    paths.ensure_directories()?;
    Ok(LedgerStore::open(FileBlobStore::new(paths.data_dir())))
}
