//! Ledger analytics
//!
//! Headline statistics plus the per-category and per-month breakdowns used
//! for charts. Everything here is a pure projection of the current ledger;
//! rejected records never contribute.

use std::collections::BTreeMap;

use crate::models::{
    Category, CategoryTotal, Money, MonthTotal, Stats, Transaction, TransactionStatus,
};

/// Compute headline statistics in a single pass
///
/// The average divides total income by the verified count floored at one, so
/// a ledger with nothing verified reports its whole total as the average.
pub fn compute_stats(transactions: &[Transaction]) -> Stats {
    let mut stats = Stats::default();

    for txn in transactions {
        match txn.status {
            TransactionStatus::Rejected => continue,
            TransactionStatus::Verified => {
                stats.total_income += txn.amount;
                stats.verified_count += 1;
            }
            TransactionStatus::Pending => {
                stats.total_income += txn.amount;
                stats.pending_income += txn.amount;
            }
        }
    }

    stats.average_transaction = stats
        .total_income
        .divide(stats.verified_count.max(1) as u64);
    stats
}

/// Income per category, in category declaration order
///
/// Categories with no contributing records are omitted.
pub fn totals_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<Category, Money> = BTreeMap::new();

    for txn in transactions.iter().filter(|t| t.counts_toward_income()) {
        *totals.entry(txn.category).or_default() += txn.amount;
    }

    totals
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect()
}

/// Income per calendar month, oldest first
///
/// Buckets are keyed by numeric `(year, month)`, so ordering holds across
/// year boundaries. Records whose date doesn't parse are left out.
pub fn totals_by_month(transactions: &[Transaction]) -> Vec<MonthTotal> {
    let mut totals: BTreeMap<(i32, u32), Money> = BTreeMap::new();

    for txn in transactions.iter().filter(|t| t.counts_toward_income()) {
        if let Some(key) = txn.month_key() {
            *totals.entry(key).or_default() += txn.amount;
        }
    }

    totals
        .into_iter()
        .map(|((year, month), total)| MonthTotal { year, month, total })
        .collect()
}
