//! Export module for IncomeFlow
//!
//! - CSV: ledger rows, spreadsheet-compatible
//! - JSON: records plus summary statistics, machine-readable
//! - YAML: the JSON document in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
