//! Strongly-typed identifier for ledger entries
//!
//! Identifiers are random UUIDs assigned when a record enters the ledger and
//! never reused.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix used when printing a short form of the identifier
const DISPLAY_PREFIX: &str = "txn-";

/// Unique identifier of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Short display form, `txn-` followed by the first eight hex digits
    pub fn short(&self) -> String {
        format!("{}{}", DISPLAY_PREFIX, &self.0.simple().to_string()[..8])
    }

    /// Check whether a user-typed identifier refers to this ID
    ///
    /// Accepts the full UUID, the short display form, or a bare hex prefix of
    /// at least four characters.
    pub fn matches(&self, identifier: &str) -> bool {
        let identifier = identifier.trim().to_ascii_lowercase();
        if let Ok(uuid) = Uuid::parse_str(&identifier) {
            return uuid == self.0;
        }
        let prefix = identifier
            .strip_prefix(DISPLAY_PREFIX)
            .unwrap_or(&identifier)
            .replace('-', "");
        prefix.len() >= 4 && self.0.simple().to_string().starts_with(&prefix)
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short())
    }
}

impl From<Uuid> for TransactionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
