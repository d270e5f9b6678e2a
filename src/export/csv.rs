//! CSV Export functionality
//!
//! Writes ledger records as spreadsheet-compatible CSV.

use std::io::Write;

use crate::error::{IncomeError, IncomeResult};
use crate::models::Transaction;

/// Column headers, in output order
pub const CSV_HEADERS: [&str; 7] = [
    "ID",
    "Date",
    "Payer",
    "Description",
    "Category",
    "Amount",
    "Status",
];

/// Export transactions to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> IncomeResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADERS)
        .map_err(|e| IncomeError::Export(e.to_string()))?;

    for txn in transactions {
        let id = txn.id.as_uuid().to_string();
        let amount = format!("{:.2}", txn.amount.units());
        csv_writer
            .write_record([
                id.as_str(),
                txn.date.as_str(),
                txn.payer.as_str(),
                txn.description.as_str(),
                txn.category.name(),
                amount.as_str(),
                txn.status.name(),
            ])
            .map_err(|e| IncomeError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| IncomeError::Export(e.to_string()))?;

    Ok(())
}
