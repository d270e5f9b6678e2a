//! Import reconciliation
//!
//! Merges a freshly extracted batch into the ledger. Incoming records go in
//! front, in their original order, ahead of everything already stored. There
//! is no deduplication: importing the same statement twice yields duplicates
//! the user removes by hand.

use tracing::debug;

use crate::models::Transaction;

/// Prepend `incoming` to `existing`
///
/// An empty batch hands `existing` back untouched.
pub fn import_batch(existing: Vec<Transaction>, incoming: Vec<Transaction>) -> Vec<Transaction> {
    if incoming.is_empty() {
        return existing;
    }

    debug!(
        incoming = incoming.len(),
        existing = existing.len(),
        "merging import batch"
    );

    let mut merged = incoming;
    merged.reserve(existing.len());
    merged.extend(existing);
    merged
}
