//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display,
//! including register views and status indicators.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};

use crate::config::Settings;
use crate::models::{Transaction, TransactionStatus};

fn status_icon(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Pending => " ",
        TransactionStatus::Verified => "✓",
        TransactionStatus::Rejected => "✗",
    }
}

/// Render the date with a strftime pattern
///
/// Dates that don't parse, and patterns chrono rejects, print the stored
/// text unchanged.
pub fn format_date(txn: &Transaction, date_format: &str) -> String {
    let Some(date) = txn.parsed_date() else {
        return txn.date.clone();
    };

    let items: Vec<Item<'_>> = StrftimeItems::new(date_format).collect();
    if items.contains(&Item::Error) {
        return txn.date.clone();
    }

    let mut rendered = String::new();
    match write!(rendered, "{}", date.format_with_items(items.iter())) {
        Ok(()) => rendered,
        Err(_) => txn.date.clone(),
    }
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{:2} {:12} {:10} {} {} {:>14}",
        status_icon(txn.status),
        txn.id.short(),
        format_date(txn, &settings.date_format),
        truncate(&txn.payer, 24),
        truncate(txn.category.name(), 15),
        txn.amount.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:2} {:12} {:10} {:24} {:15} {:>14}\n",
        "St", "ID", "Date", "Payer", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(82));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id.as_uuid()));
    output.push_str(&format!("Short ID:    {}\n", txn.id.short()));
    output.push_str(&format!(
        "Date:        {}\n",
        format_date(txn, &settings.date_format)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Payer:       {}\n", txn.payer));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Status:      {}\n", txn.status));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    if let Some(raw) = txn.raw_text.as_deref().filter(|r| *r != txn.description) {
        output.push_str(&format!("Source text: {}\n", raw));
    }

    output
}

/// Truncate (or pad) a string to exactly `max_len` characters
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    let len = s.chars().count();
    if len <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
