//! CLI command for data export
//!
//! Writes the filtered ledger view to a file or stdout.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{IncomeError, IncomeResult};
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv};
use crate::models::Transaction;
use crate::storage::LedgerStore;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV rows (spreadsheet-compatible)
    Csv,
    /// JSON document with summary statistics
    Json,
    /// YAML document with summary statistics
    Yaml,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only export transactions matching this query
    #[arg(short, long, default_value = "")]
    pub query: String,
}

/// Write transactions in the chosen format
pub fn write_export<W: Write>(
    transactions: &[Transaction],
    format: ExportFormat,
    writer: W,
) -> IncomeResult<()> {
    match format {
        ExportFormat::Csv => export_transactions_csv(transactions, writer),
        ExportFormat::Json => export_full_json(transactions, writer, true),
        ExportFormat::Yaml => export_full_yaml(transactions, writer),
    }
}

/// Handle the export command
pub fn handle_export_command(store: &LedgerStore, args: ExportArgs) -> IncomeResult<()> {
    let view = store.filter_and_sort(&args.query);

    match &args.output {
        Some(output) => {
            let file = File::create(output).map_err(|e| {
                IncomeError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(&view, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| IncomeError::Export(e.to_string()))?;
            println!(
                "Exported {} transactions to: {}",
                view.len(),
                output.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            write_export(&view, args.format, stdout.lock())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use crate::storage::MemoryBlobStore;
    use tempfile::TempDir;

    #[test]
    fn test_export_filtered_csv_to_file() {
        let mut store = LedgerStore::open(MemoryBlobStore::new());
        store.import(vec![
            Transaction::new("2024-01-05", Money::from_cents(50000), "WIRE", "Acme", Category::Sales),
            Transaction::new("2024-02-10", Money::from_cents(30000), "GRANT", "Foundation", Category::Grant),
        ]);

        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.csv");
        handle_export_command(
            &store,
            ExportArgs {
                format: ExportFormat::Csv,
                output: Some(output.clone()),
                query: "acme".to_string(),
            },
        )
        .unwrap();

        let contents = std::fs::read_to_string(output).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.contains("Acme"));
        assert!(!contents.contains("Foundation"));
    }

    #[test]
    fn test_write_export_json() {
        let txn = Transaction::new("2024-01-05", Money::from_cents(1250), "x", "Acme", Category::Sales);
        let mut output = Vec::new();
        write_export(&[txn], ExportFormat::Json, &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["transactions"][0]["amount"], 12.5);
    }
}
