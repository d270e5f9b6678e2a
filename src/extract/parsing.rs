//! Parsing of extraction service responses
//!
//! Model responses often wrap the JSON payload in prose or markdown fences,
//! so the array is located by its outermost brackets before parsing. Each
//! element is then decoded on its own so one malformed record does not sink
//! the rest of the batch.

use serde_json::Value;
use tracing::warn;

use crate::error::{IncomeError, IncomeResult};

use super::CandidateTransaction;

const MAX_RAW_IN_ERROR: usize = 200;

fn truncated(s: &str) -> String {
    if s.chars().count() > MAX_RAW_IN_ERROR {
        let head: String = s.chars().take(MAX_RAW_IN_ERROR).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

/// Parse the candidate array out of a service response
pub fn parse_candidates(response: &str) -> IncomeResult<Vec<CandidateTransaction>> {
    let response = response.trim();

    let start = response.find('[');
    let end = response.rfind(']');

    match (start, end) {
        (Some(s), Some(e)) if s < e => {
            let json_str = &response[s..=e];
            let elements: Vec<Value> = serde_json::from_str(json_str).map_err(|e| {
                IncomeError::Extraction(format!(
                    "Invalid JSON from extraction service: {} | Raw: {}",
                    e,
                    truncated(json_str)
                ))
            })?;
            decode_elements(elements, json_str)
        }
        _ => Err(IncomeError::Extraction(format!(
            "No JSON array found in extraction response | Raw: {}",
            truncated(response)
        ))),
    }
}

/// Decode each element, skipping the unreadable ones
///
/// Fails only when there were elements and none of them could be read.
fn decode_elements(elements: Vec<Value>, raw: &str) -> IncomeResult<Vec<CandidateTransaction>> {
    let total = elements.len();
    let mut last_error = None;

    let candidates: Vec<CandidateTransaction> = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value(element) {
            Ok(candidate) => Some(candidate),
            Err(e) => {
                warn!(index, error = %e, "skipping unreadable extracted record");
                last_error = Some(e);
                None
            }
        })
        .collect();

    match last_error {
        Some(e) if candidates.is_empty() && total > 0 => Err(IncomeError::Extraction(format!(
            "Invalid records from extraction service: {} | Raw: {}",
            e,
            truncated(raw)
        ))),
        _ => Ok(candidates),
    }
}
