//! CLI command for the income summary
//!
//! Prints the headline statistics followed by category and month breakdowns.

use clap::Args;

use crate::config::Settings;
use crate::display::report::{format_category_breakdown, format_month_breakdown, format_stats};
use crate::error::IncomeResult;
use crate::services::{compute_stats, totals_by_category, totals_by_month};
use crate::storage::LedgerStore;

/// Arguments for the stats command
#[derive(Args, Debug, Default)]
pub struct StatsArgs {
    /// Only summarize transactions matching this query
    #[arg(short, long, default_value = "")]
    pub query: String,
}

/// Render the summary for the (optionally filtered) ledger
pub fn render_stats(store: &LedgerStore, settings: &Settings, args: &StatsArgs) -> String {
    let symbol = settings.currency_symbol.as_str();
    let view = store.filter_and_sort(&args.query);

    let mut output = format_stats(&compute_stats(&view), symbol);
    output.push('\n');
    output.push_str(&format_category_breakdown(&totals_by_category(&view), symbol));
    output.push('\n');
    output.push_str(&format_month_breakdown(&totals_by_month(&view), symbol));
    output
}

/// Handle the stats command
pub fn handle_stats_command(
    store: &LedgerStore,
    settings: &Settings,
    args: StatsArgs,
) -> IncomeResult<()> {
    print!("{}", render_stats(store, settings, &args));
    Ok(())
}
