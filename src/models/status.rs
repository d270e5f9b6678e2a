//! Review status of a transaction
//!
//! Every imported record starts as `Pending`. Any status may be set from any
//! other status; re-opening a verified or rejected record is allowed.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Workflow status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum TransactionStatus {
    /// Awaiting review; counts toward totals and pending income
    #[default]
    Pending,
    /// Confirmed by the user; counts toward totals and the verified count
    Verified,
    /// Excluded from every total
    Rejected,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 3] = [Self::Pending, Self::Verified, Self::Rejected];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Verified => "Verified",
            Self::Rejected => "Rejected",
        }
    }

    /// Whether records with this status contribute to income totals
    pub fn counts_toward_income(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Unknown names, `null` and non-string values all become `Pending`
impl<'de> Deserialize<'de> for TransactionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(name) => name.parse().unwrap_or_default(),
            _ => Self::Pending,
        })
    }
}

/// Error returned when user input names no known status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown status '{}' (expected one of: Pending, Verified, Rejected)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for TransactionStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "verified" => Ok(Self::Verified),
            "rejected" => Ok(Self::Rejected),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        assert_eq!(TransactionStatus::default(), TransactionStatus::Pending);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TransactionStatus::Verified).unwrap();
        assert_eq!(json, "\"Verified\"");

        let status: TransactionStatus = serde_json::from_str("\"Rejected\"").unwrap();
        assert_eq!(status, TransactionStatus::Rejected);
    }

    #[test]
    fn test_unknown_value_falls_back_to_pending() {
        let status: TransactionStatus = serde_json::from_str("\"Approved\"").unwrap();
        assert_eq!(status, TransactionStatus::Pending);

        let status: TransactionStatus = serde_json::from_str("null").unwrap();
        assert_eq!(status, TransactionStatus::Pending);
        let status: TransactionStatus = serde_json::from_str("{\"state\": 2}").unwrap();
        assert_eq!(status, TransactionStatus::Pending);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("VERIFIED".parse::<TransactionStatus>().unwrap(), TransactionStatus::Verified);
        assert!("done".parse::<TransactionStatus>().is_err());
    }

    #[test]
    fn test_income_inclusion() {
        assert!(TransactionStatus::Pending.counts_toward_income());
        assert!(TransactionStatus::Verified.counts_toward_income());
        assert!(!TransactionStatus::Rejected.counts_toward_income());
    }
}
