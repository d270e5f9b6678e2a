//! Derived ledger statistics
//!
//! None of these values are persisted; they are recomputed from the ledger
//! every time they are needed.

use chrono::NaiveDate;
use serde::Serialize;

use super::category::Category;
use super::money::Money;

/// Headline income figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Sum of all non-rejected amounts
    pub total_income: Money,
    /// Sum of pending amounts
    pub pending_income: Money,
    /// Number of verified records
    pub verified_count: usize,
    /// `total_income / max(1, verified_count)`
    pub average_transaction: Money,
}

/// Income total for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
}

/// Income total for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthTotal {
    pub year: i32,
    pub month: u32,
    pub total: Money,
}

impl MonthTotal {
    /// Short label for charts, e.g. `Jan 24`
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%b %y").to_string())
            .unwrap_or_else(|| format!("{:04}-{:02}", self.year, self.month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_label() {
        let m = MonthTotal {
            year: 2024,
            month: 2,
            total: Money::zero(),
        };
        assert_eq!(m.label(), "Feb 24");
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let stats = Stats {
            total_income: Money::from_cents(80000),
            pending_income: Money::from_cents(30000),
            verified_count: 1,
            average_transaction: Money::from_cents(80000),
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["totalIncome"], 800);
        assert_eq!(json["verifiedCount"], 1);
    }
}
