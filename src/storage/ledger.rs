//! Ledger store
//!
//! Owns the authoritative, ordered transaction collection. The ledger is
//! loaded when the store is opened and written back in full after every
//! mutation. Persistence problems never escape: an unreadable blob opens as
//! an empty ledger and a failed write is logged while the in-memory ledger
//! stays authoritative.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::IncomeResult;
use crate::models::{Category, Stats, Transaction, TransactionId, TransactionStatus};
use crate::services::{analytics, query, reconcile, workflow};

use super::blob::BlobStore;

/// Key under which the ledger blob is stored
pub const LEDGER_KEY: &str = "incomeflow_transactions";

/// Current blob layout version
pub const LEDGER_SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct LedgerBlobRef<'a> {
    version: u32,
    transactions: &'a [Transaction],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredLedger {
    Versioned {
        #[allow(dead_code)]
        version: u32,
        transactions: Vec<Value>,
    },
    Bare(Vec<Value>),
}

impl StoredLedger {
    fn into_records(self) -> Vec<Value> {
        match self {
            Self::Versioned { transactions, .. } | Self::Bare(transactions) => transactions,
        }
    }
}

/// Serialize a collection into the blob format
pub fn encode_ledger(transactions: &[Transaction]) -> IncomeResult<String> {
    let blob = LedgerBlobRef {
        version: LEDGER_SCHEMA_VERSION,
        transactions,
    };
    Ok(serde_json::to_string(&blob)?)
}

/// Parse a blob, accepting both the versioned object and a bare array
///
/// Records that cannot be decoded at all (no usable id, out-of-range amount)
/// are skipped with a warning; the rest of the ledger survives.
pub fn decode_ledger(blob: &str) -> IncomeResult<Vec<Transaction>> {
    let stored: StoredLedger = serde_json::from_str(blob)?;
    let records = stored.into_records();
    let total = records.len();

    let transactions: Vec<Transaction> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(txn) => Some(txn),
            Err(e) => {
                warn!(index, error = %e, "skipping unreadable stored transaction");
                None
            }
        })
        .collect();

    if transactions.len() < total {
        warn!(skipped = total - transactions.len(), "stored ledger had unreadable records");
    }
    Ok(transactions)
}

/// Restore the last persisted collection
///
/// A missing, unreadable or corrupt blob yields an empty ledger.
pub fn load(blobs: &dyn BlobStore) -> Vec<Transaction> {
    let blob = match blobs.get(LEDGER_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            debug!("no stored ledger, starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!(error = %e, "failed to read stored ledger, starting empty");
            return Vec::new();
        }
    };

    match decode_ledger(&blob) {
        Ok(transactions) => {
            debug!(count = transactions.len(), "loaded ledger");
            transactions
        }
        Err(e) => {
            warn!(error = %e, "stored ledger is unreadable, starting empty");
            Vec::new()
        }
    }
}

/// Authoritative ledger bound to a persistence backend
pub struct LedgerStore {
    blobs: Box<dyn BlobStore>,
    transactions: Vec<Transaction>,
}

impl LedgerStore {
    /// Open the store, loading whatever the backend holds
    pub fn open(blobs: impl BlobStore + 'static) -> Self {
        let blobs: Box<dyn BlobStore> = Box::new(blobs);
        let transactions = load(blobs.as_ref());
        Self {
            blobs,
            transactions,
        }
    }

    /// The ledger in stored order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Look up a record by a user-typed identifier (full UUID or short form)
    ///
    /// Returns `None` if nothing matches or the identifier is ambiguous.
    pub fn find(&self, identifier: &str) -> Option<&Transaction> {
        let mut matches = self.transactions.iter().filter(|t| t.id.matches(identifier));
        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(first)
    }

    /// Write the full collection to the backend
    ///
    /// Failures are logged, not raised; the in-memory ledger stays authoritative.
    pub fn save(&self) {
        let result =
            encode_ledger(&self.transactions).and_then(|blob| self.blobs.set(LEDGER_KEY, &blob));

        match result {
            Ok(()) => debug!(count = self.transactions.len(), "saved ledger"),
            Err(e) => warn!(error = %e, "failed to save ledger, keeping in-memory state"),
        }
    }

    fn apply(&mut self, op: impl FnOnce(Vec<Transaction>) -> Vec<Transaction>) {
        let current = std::mem::take(&mut self.transactions);
        self.transactions = op(current);
        self.save();
    }

    /// Prepend an extracted batch; returns how many records were added
    pub fn import(&mut self, batch: Vec<Transaction>) -> usize {
        let added = batch.len();
        if added == 0 {
            return 0;
        }
        self.apply(|current| reconcile::import_batch(current, batch));
        info!(added, total = self.transactions.len(), "imported transactions");
        added
    }

    /// Set a record's status; returns whether the record exists
    pub fn update_status(&mut self, id: TransactionId, status: TransactionStatus) -> bool {
        let found = self.get(id).is_some();
        self.apply(|current| workflow::update_status(current, id, status));
        found
    }

    /// Set a record's category; returns whether the record exists
    pub fn update_category(&mut self, id: TransactionId, category: Category) -> bool {
        let found = self.get(id).is_some();
        self.apply(|current| workflow::update_category(current, id, category));
        found
    }

    /// Delete a record; returns whether the record existed
    pub fn delete(&mut self, id: TransactionId) -> bool {
        let found = self.get(id).is_some();
        self.apply(|current| workflow::delete(current, id));
        found
    }

    pub fn stats(&self) -> Stats {
        analytics::compute_stats(&self.transactions)
    }

    pub fn filter_and_sort(&self, query: &str) -> Vec<Transaction> {
        query::filter_and_sort(&self.transactions, query)
    }
}
