//! Core data models for IncomeFlow
//!
//! Transactions and the closed enumerations they carry, plus the derived
//! statistics types computed from a ledger.

pub mod category;
pub mod ids;
pub mod lenient;
pub mod money;
pub mod stats;
pub mod status;
pub mod transaction;

pub use category::Category;
pub use ids::TransactionId;
pub use money::Money;
pub use stats::{CategoryTotal, MonthTotal, Stats};
pub use status::TransactionStatus;
pub use transaction::{Transaction, UNKNOWN_PAYER};
