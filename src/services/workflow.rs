//! Review workflow
//!
//! Status changes, category reassignment and deletion. Each operation takes
//! the collection by value and returns the next collection; an ID that is not
//! present leaves the collection exactly as it was. Status changes are
//! unrestricted, so a verified or rejected record can be re-opened.

use tracing::debug;

use crate::models::{Category, Transaction, TransactionId, TransactionStatus};

/// Set the status of the record with `id`
pub fn update_status(
    mut transactions: Vec<Transaction>,
    id: TransactionId,
    status: TransactionStatus,
) -> Vec<Transaction> {
    if let Some(txn) = transactions.iter_mut().find(|t| t.id == id) {
        debug!(%id, from = %txn.status, to = %status, "updating status");
        txn.status = status;
    }
    transactions
}

/// Set the category of the record with `id`
pub fn update_category(
    mut transactions: Vec<Transaction>,
    id: TransactionId,
    category: Category,
) -> Vec<Transaction> {
    if let Some(txn) = transactions.iter_mut().find(|t| t.id == id) {
        debug!(%id, from = %txn.category, to = %category, "updating category");
        txn.category = category;
    }
    transactions
}

/// Remove the record with `id`
pub fn delete(mut transactions: Vec<Transaction>, id: TransactionId) -> Vec<Transaction> {
    let before = transactions.len();
    transactions.retain(|t| t.id != id);
    if transactions.len() != before {
        debug!(%id, "deleted transaction");
    }
    transactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn ledger() -> Vec<Transaction> {
        vec![
            Transaction::new("2024-01-05", Money::from_cents(50000), "a", "A", Category::Sales),
            Transaction::new("2024-02-10", Money::from_cents(30000), "b", "B", Category::Grant),
            Transaction::new("2024-01-20", Money::from_cents(10000), "c", "C", Category::Refund),
        ]
    }

    #[test]
    fn test_update_status_changes_only_status() {
        let original = ledger();
        let id = original[1].id;

        let next = update_status(original.clone(), id, TransactionStatus::Verified);

        assert_eq!(next[1].status, TransactionStatus::Verified);
        let mut expected = original[1].clone();
        expected.status = TransactionStatus::Verified;
        assert_eq!(next[1], expected);
        assert_eq!(next[0], original[0]);
        assert_eq!(next[2], original[2]);
    }

    #[test]
    fn test_status_can_be_reopened() {
        let original = ledger();
        let id = original[0].id;

        let rejected = update_status(original, id, TransactionStatus::Rejected);
        let reopened = update_status(rejected, id, TransactionStatus::Pending);
        assert_eq!(reopened[0].status, TransactionStatus::Pending);

        let verified = update_status(reopened, id, TransactionStatus::Verified);
        let rejected = update_status(verified, id, TransactionStatus::Rejected);
        assert_eq!(rejected[0].status, TransactionStatus::Rejected);
    }

    #[test]
    fn test_update_category() {
        let original = ledger();
        let id = original[2].id;

        let next = update_category(original.clone(), id, Category::Investment);
        assert_eq!(next[2].category, Category::Investment);
        assert_eq!(next[2].status, original[2].status);
        assert_eq!(next[2].amount, original[2].amount);
    }

    #[test]
    fn test_delete_removes_only_target() {
        let original = ledger();
        let id = original[1].id;

        let next = delete(original.clone(), id);
        assert_eq!(next, vec![original[0].clone(), original[2].clone()]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let original = ledger();
        let missing = TransactionId::new();

        assert_eq!(
            update_status(original.clone(), missing, TransactionStatus::Rejected),
            original
        );
        assert_eq!(update_category(original.clone(), missing, Category::Other), original);
        assert_eq!(delete(original.clone(), missing), original);
    }
}
