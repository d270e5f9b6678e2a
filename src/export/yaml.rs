//! YAML Export functionality
//!
//! Human-readable rendering of the same document as the JSON export.

use std::io::Write;

use crate::error::{IncomeError, IncomeResult};
use crate::export::json::FullExport;
use crate::models::Transaction;

/// Export transactions to YAML
pub fn export_full_yaml<W: Write>(transactions: &[Transaction], mut writer: W) -> IncomeResult<()> {
    let export = FullExport::from_transactions(transactions);

    let header = format!(
        "# IncomeFlow Export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| IncomeError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| IncomeError::Export(e.to_string()))?;

    Ok(())
}
