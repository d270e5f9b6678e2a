//! Income category model
//!
//! The category set is closed. Values coming from outside the ledger (stored
//! blobs, extraction output) that don't name a known category land in
//! [`Category::Other`] rather than failing.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Category of an income transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
pub enum Category {
    Sales,
    #[serde(rename = "Service Revenue")]
    ServiceRevenue,
    Investment,
    Refund,
    Grant,
    #[default]
    Other,
}

impl Category {
    /// All categories in declaration order
    pub const ALL: [Category; 6] = [
        Category::Sales,
        Category::ServiceRevenue,
        Category::Investment,
        Category::Refund,
        Category::Grant,
        Category::Other,
    ];

    /// Display name, identical to the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::ServiceRevenue => "Service Revenue",
            Self::Investment => "Investment",
            Self::Refund => "Refund",
            Self::Grant => "Grant",
            Self::Other => "Other",
        }
    }

    /// Map any string onto a category, falling back to `Other`
    pub fn from_lenient(value: &str) -> Self {
        value.parse().unwrap_or(Self::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Unknown names, `null` and non-string values all become `Other`
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(name) => Self::from_lenient(&name),
            _ => Self::Other,
        })
    }
}

/// Error returned when user input names no known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
        write!(f, "Unknown category '{}' (expected one of: {})", self.0, names.join(", "))
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "sales" => Ok(Self::Sales),
            "servicerevenue" | "service" => Ok(Self::ServiceRevenue),
            "investment" => Ok(Self::Investment),
            "refund" => Ok(Self::Refund),
            "grant" => Ok(Self::Grant),
            "other" => Ok(Self::Other),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}
