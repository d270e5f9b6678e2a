//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger store.

pub mod export;
pub mod import;
pub mod report;
pub mod transaction;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use import::{handle_import_command, ImportArgs};
pub use report::{handle_stats_command, StatsArgs};
pub use transaction::{handle_transaction_command, TransactionCommands};
