//! Report formatting for terminal output
//!
//! Summary statistics plus per-category and per-month breakdowns.

use crate::models::{CategoryTotal, MonthTotal, Stats};

const BAR_WIDTH: usize = 20;

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format the headline statistics block
pub fn format_stats(stats: &Stats, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str("Income Summary\n");
    output.push_str(&separator(36));
    output.push('\n');
    output.push_str(&format!(
        "{:20} {:>15}\n",
        "Total income:",
        stats.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:20} {:>15}\n",
        "Pending review:",
        stats.pending_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!("{:20} {:>15}\n", "Verified:", stats.verified_count));
    output.push_str(&format!(
        "{:20} {:>15}\n",
        "Average (verified):",
        stats.average_transaction.format_with_symbol(symbol)
    ));
    output
}

/// Format category totals with proportional bars
pub fn format_category_breakdown(totals: &[CategoryTotal], symbol: &str) -> String {
    if totals.is_empty() {
        return "No income by category yet.\n".to_string();
    }

    let max = totals
        .iter()
        .map(|t| t.total.units())
        .fold(0.0_f64, f64::max);

    let mut output = String::from("By Category\n");
    output.push_str(&separator(56));
    output.push('\n');
    for t in totals {
        output.push_str(&format!(
            "{:16} {:>15}  {}\n",
            t.category.name(),
            t.total.format_with_symbol(symbol),
            format_bar(t.total.units(), max, BAR_WIDTH)
        ));
    }
    output
}

/// Format month totals, oldest first
pub fn format_month_breakdown(totals: &[MonthTotal], symbol: &str) -> String {
    if totals.is_empty() {
        return "No dated income yet.\n".to_string();
    }

    let max = totals
        .iter()
        .map(|t| t.total.units())
        .fold(0.0_f64, f64::max);

    let mut output = String::from("By Month\n");
    output.push_str(&separator(56));
    output.push('\n');
    for t in totals {
        output.push_str(&format!(
            "{:16} {:>15}  {}\n",
            t.label(),
            t.total.format_with_symbol(symbol),
            format_bar(t.total.units(), max, BAR_WIDTH)
        ));
    }
    output
}
