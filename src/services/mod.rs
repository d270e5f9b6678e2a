//! Service layer for IncomeFlow
//!
//! Pure ledger operations: import reconciliation, the review workflow,
//! analytics and the search view. None of these touch storage; the
//! [`LedgerStore`](crate::storage::LedgerStore) applies them and persists.

pub mod analytics;
pub mod query;
pub mod reconcile;
pub mod workflow;

pub use analytics::{compute_stats, totals_by_category, totals_by_month};
pub use query::{filter_and_sort, recent};
pub use reconcile::import_batch;
