//! Field-level deserializers for records that come from outside the ledger
//!
//! Stored blobs and extraction payloads are not trusted to be well typed. A
//! `null` or wrongly typed text field becomes a sensible default instead of
//! failing the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::transaction::UNKNOWN_PAYER;

/// Render a scalar as text; anything else is empty
fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Text field where `null` or a non-scalar means empty
pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_to_string(Value::deserialize(deserializer)?))
}

/// Optional text field where `null`, blank or a non-scalar means absent
pub fn optional_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let text = value_to_string(Value::deserialize(deserializer)?);
    Ok(Some(text).filter(|t| !t.trim().is_empty()))
}

/// Payer field, falling back to [`UNKNOWN_PAYER`]
pub fn payer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(optional_string(deserializer)?.unwrap_or_else(|| UNKNOWN_PAYER.to_string()))
}
