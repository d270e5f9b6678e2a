//! Ledger search and ordering
//!
//! Produces the presentation view of the ledger: a case-insensitive search
//! over payer, description and amount, ordered newest first.

use std::cmp::Reverse;

use crate::models::Transaction;

/// Whether `txn` matches an already lowercased query
fn matches(txn: &Transaction, query: &str) -> bool {
    txn.payer.to_lowercase().contains(query)
        || txn.description.to_lowercase().contains(query)
        || txn.amount.plain_decimal().contains(query)
}

/// Filter by `query` and sort by date, newest first
///
/// An empty query keeps every record. The sort is stable, so records sharing
/// a date keep their ledger order. Records whose date doesn't parse sort after
/// all dated records.
pub fn filter_and_sort(transactions: &[Transaction], query: &str) -> Vec<Transaction> {
    let query = query.to_lowercase();

    let mut view: Vec<Transaction> = transactions
        .iter()
        .filter(|t| matches(t, &query))
        .cloned()
        .collect();

    view.sort_by_cached_key(|t| Reverse(t.parsed_date()));
    view
}

/// The `limit` most recent records
pub fn recent(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut view = filter_and_sort(transactions, "");
    view.truncate(limit);
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionStatus};

    fn txn(date: &str, cents: i64, payer: &str, description: &str) -> Transaction {
        Transaction::new(date, Money::from_cents(cents), description, payer, Category::Sales)
    }

    fn scenario() -> Vec<Transaction> {
        let mut a = txn("2024-01-05", 50000, "Acme Corp", "WIRE ACME INVOICE 17");
        a.status = TransactionStatus::Verified;
        let b = txn("2024-02-10", 30000, "Globex", "ACH GLOBEX PAYMENT");
        let mut c = txn("2024-01-20", 10000, "Initech", "REFUND INITECH");
        c.status = TransactionStatus::Rejected;
        vec![a, b, c]
    }

    #[test]
    fn test_empty_query_sorts_newest_first() {
        let ledger = scenario();
        let view = filter_and_sort(&ledger, "");
        let ids: Vec<_> = view.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![ledger[1].id, ledger[2].id, ledger[0].id]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let ledger = vec![
            txn("2024-03-01", 100, "First", "x"),
            txn("2024-03-01", 200, "Second", "x"),
            txn("2024-04-01", 300, "Newest", "x"),
            txn("2024-03-01", 400, "Third", "x"),
        ];
        let view = filter_and_sort(&ledger, "");
        let payers: Vec<_> = view.iter().map(|t| t.payer.as_str()).collect();
        assert_eq!(payers, vec!["Newest", "First", "Second", "Third"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let ledger = scenario();
        assert_eq!(filter_and_sort(&ledger, "acme").len(), 1);
        assert_eq!(filter_and_sort(&ledger, "GLOBEX").len(), 1);
        assert_eq!(filter_and_sort(&ledger, "refund")[0].payer, "Initech");
    }

    #[test]
    fn test_matches_plain_amount() {
        let ledger = scenario();
        let view = filter_and_sort(&ledger, "300");
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].payer, "Globex");

        let fractional = vec![txn("2024-01-01", 1250, "Fractional", "x")];
        assert_eq!(filter_and_sort(&fractional, "12.5").len(), 1);
        assert!(filter_and_sort(&fractional, "12.50").is_empty());
    }

    #[test]
    fn test_no_match() {
        assert!(filter_and_sort(&scenario(), "umbrella").is_empty());
    }

    #[test]
    fn test_undated_records_sort_last() {
        let ledger = vec![
            txn("sometime", 100, "Undated", "x"),
            txn("2020-01-01", 200, "Old", "x"),
        ];
        let view = filter_and_sort(&ledger, "");
        assert_eq!(view[0].payer, "Old");
        assert_eq!(view[1].payer, "Undated");
    }

    #[test]
    fn test_recent_limits_sorted_view() {
        let ledger = scenario();
        let view = recent(&ledger, 2);
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].payer, "Globex");
        assert_eq!(view[1].payer, "Initech");
    }
}
