//! JSON Export functionality
//!
//! Exports ledger records with their summary statistics and schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{IncomeError, IncomeResult};
use crate::models::{Stats, Transaction};
use crate::services::compute_stats;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Statistics over the exported records
    pub stats: Stats,

    pub transactions: Vec<Transaction>,
}

impl FullExport {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            stats: compute_stats(transactions),
            transactions: transactions.to_vec(),
        }
    }
}

/// Export transactions to JSON
pub fn export_full_json<W: Write>(
    transactions: &[Transaction],
    writer: W,
    pretty: bool,
) -> IncomeResult<()> {
    let export = FullExport::from_transactions(transactions);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| IncomeError::Export(e.to_string()))?;

    Ok(())
}
