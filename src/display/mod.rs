//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger records and reports for
//! terminal display, including status indicators and simple bar charts.

pub mod report;
pub mod transaction;

pub use report::{format_category_breakdown, format_month_breakdown, format_stats};
pub use transaction::{
    format_date, format_transaction_details, format_transaction_register, format_transaction_row,
};
