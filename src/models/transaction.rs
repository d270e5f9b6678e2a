//! Transaction model
//!
//! A single income record. Dates are kept exactly as received so that
//! malformed extraction output survives a save/load cycle untouched; the
//! parsed form is derived on demand.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;
use super::status::TransactionStatus;

/// Payer recorded when the source gives none
pub const UNKNOWN_PAYER: &str = "Unknown Payer";

/// ISO 8601 calendar date format used for transaction dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An income transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier, assigned when the record enters the ledger
    pub id: TransactionId,

    /// Calendar date as `YYYY-MM-DD`
    #[serde(default, deserialize_with = "super::lenient::string")]
    pub date: String,

    /// Income amount
    #[serde(default)]
    pub amount: Money,

    /// Original source line
    #[serde(default, deserialize_with = "super::lenient::string")]
    pub description: String,

    /// Paying entity
    #[serde(default = "default_payer", deserialize_with = "super::lenient::payer")]
    pub payer: String,

    #[serde(default)]
    pub category: Category,

    #[serde(default)]
    pub status: TransactionStatus,

    /// Unparsed source text kept for auditing
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::lenient::optional_string"
    )]
    pub raw_text: Option<String>,
}

fn default_payer() -> String {
    UNKNOWN_PAYER.to_string()
}

impl Transaction {
    /// Create a new pending transaction with a fresh ID
    pub fn new(
        date: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
        payer: impl Into<String>,
        category: Category,
    ) -> Self {
        let payer = payer.into();
        let payer = if payer.trim().is_empty() {
            default_payer()
        } else {
            payer
        };

        Self {
            id: TransactionId::new(),
            date: date.into(),
            amount,
            description: description.into(),
            payer,
            category,
            status: TransactionStatus::Pending,
            raw_text: None,
        }
    }

    /// The date parsed as an ISO calendar date, if well formed
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    /// `(year, month)` bucket of the date, if well formed
    pub fn month_key(&self) -> Option<(i32, u32)> {
        self.parsed_date().map(|d| (d.year(), d.month()))
    }

    /// Whether this record contributes to income totals
    pub fn counts_toward_income(&self) -> bool {
        self.status.counts_toward_income()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.payer, self.amount)
    }
}
