//! Extraction boundary
//!
//! Turning free-form statement text into candidate records is delegated to an
//! [`Extractor`]. [`run_extraction`] wraps one call and folds every way it can
//! end into an [`ExtractionOutcome`]: a ready-to-import batch, nothing
//! recognized, or a failure. A failed call never yields a partial batch.

pub mod openai;
pub mod parsing;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::IncomeResult;
use crate::models::{lenient, Category, Money, Transaction, TransactionStatus, UNKNOWN_PAYER};

pub use openai::OpenAiExtractor;
pub use parsing::parse_candidates;

/// Message shown when the extraction service fails
pub const FAILURE_MESSAGE: &str =
    "Failed to process text. Check the extraction service settings and make sure the text is readable.";

/// Message shown when the service recognizes nothing
pub const EMPTY_MESSAGE: &str =
    "No income transactions could be identified. Please check the text.";

/// A record as returned by the extraction service, before it enters the ledger
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CandidateTransaction {
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(default)]
    pub amount: Money,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub payer: Option<String>,
    #[serde(default)]
    pub category: Category,
}

impl CandidateTransaction {
    /// Promote to a ledger record: fresh ID, `Pending`, description kept as
    /// the raw source text
    pub fn into_transaction(self) -> Transaction {
        let payer = self
            .payer
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_PAYER.to_string());
        let raw_text = Some(self.description.clone());

        let mut txn = Transaction::new(self.date, self.amount, self.description, payer, self.category);
        txn.status = TransactionStatus::Pending;
        txn.raw_text = raw_text;
        txn
    }
}

/// Something that turns raw statement text into candidate records
pub trait Extractor {
    fn extract(&self, raw_text: &str) -> IncomeResult<Vec<CandidateTransaction>>;
}

/// Extractor for text that already is an extraction payload (a JSON array of
/// candidates, possibly wrapped in prose or code fences)
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadExtractor;

impl Extractor for PayloadExtractor {
    fn extract(&self, raw_text: &str) -> IncomeResult<Vec<CandidateTransaction>> {
        parse_candidates(raw_text)
    }
}

/// How an extraction attempt ended
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    /// Records ready for the reconciler
    Success(Vec<Transaction>),
    /// The service ran but recognized no income
    EmptyResult,
    /// The service failed or returned something unreadable
    Failure(String),
}

impl ExtractionOutcome {
    /// Message suitable for showing the user, if the outcome needs one
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::Success(_) => None,
            Self::EmptyResult => Some(EMPTY_MESSAGE),
            Self::Failure(_) => Some(FAILURE_MESSAGE),
        }
    }
}

/// Run one extraction and prepare its batch for import
pub fn run_extraction(extractor: &dyn Extractor, raw_text: &str) -> ExtractionOutcome {
    if raw_text.trim().is_empty() {
        return ExtractionOutcome::EmptyResult;
    }

    match extractor.extract(raw_text) {
        Ok(candidates) if candidates.is_empty() => {
            info!("extraction recognized no transactions");
            ExtractionOutcome::EmptyResult
        }
        Ok(candidates) => {
            info!(count = candidates.len(), "extraction succeeded");
            ExtractionOutcome::Success(
                candidates
                    .into_iter()
                    .map(CandidateTransaction::into_transaction)
                    .collect(),
            )
        }
        Err(e) => {
            warn!(error = %e, "extraction failed");
            ExtractionOutcome::Failure(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IncomeError;
    use std::cell::Cell;

    struct StubExtractor {
        result: fn() -> IncomeResult<Vec<CandidateTransaction>>,
        calls: Cell<usize>,
    }

    impl StubExtractor {
        fn new(result: fn() -> IncomeResult<Vec<CandidateTransaction>>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    impl Extractor for StubExtractor {
        fn extract(&self, _raw_text: &str) -> IncomeResult<Vec<CandidateTransaction>> {
            self.calls.set(self.calls.get() + 1);
            (self.result)()
        }
    }

    fn two_candidates() -> IncomeResult<Vec<CandidateTransaction>> {
        Ok(vec![
            CandidateTransaction {
                date: "2024-03-01".into(),
                amount: Money::from_cents(120000),
                description: "STRIPE PAYOUT".into(),
                payer: Some("Stripe".into()),
                category: Category::Sales,
            },
            CandidateTransaction {
                date: "2024-03-02".into(),
                amount: Money::from_cents(4500),
                description: "DEPOSIT".into(),
                payer: None,
                category: Category::Other,
            },
        ])
    }

    #[test]
    fn test_success_prepares_batch() {
        let stub = StubExtractor::new(two_candidates);
        let outcome = run_extraction(&stub, "statement text");

        let ExtractionOutcome::Success(batch) = outcome else {
            panic!("expected success");
        };
        assert_eq!(batch.len(), 2);
        assert!(batch.iter().all(|t| t.status == TransactionStatus::Pending));
        assert_ne!(batch[0].id, batch[1].id);
        assert_eq!(batch[0].raw_text.as_deref(), Some("STRIPE PAYOUT"));
        assert_eq!(batch[1].payer, UNKNOWN_PAYER);
    }

    #[test]
    fn test_empty_result_is_distinct() {
        let stub = StubExtractor::new(|| Ok(Vec::new()));
        let outcome = run_extraction(&stub, "nothing here");
        assert_eq!(outcome, ExtractionOutcome::EmptyResult);
        assert_eq!(outcome.user_message(), Some(EMPTY_MESSAGE));
    }

    #[test]
    fn test_failure_discards_everything() {
        let stub = StubExtractor::new(|| Err(IncomeError::Extraction("HTTP 401".into())));
        let outcome = run_extraction(&stub, "statement text");
        assert!(matches!(outcome, ExtractionOutcome::Failure(ref msg) if msg.contains("401")));
        assert_eq!(outcome.user_message(), Some(FAILURE_MESSAGE));
    }

    #[test]
    fn test_blank_text_skips_extractor() {
        let stub = StubExtractor::new(two_candidates);
        assert_eq!(run_extraction(&stub, "   \n"), ExtractionOutcome::EmptyResult);
        assert_eq!(stub.calls.get(), 0);
    }

    #[test]
    fn test_payload_extractor() {
        let payload = r#"[{"date":"2024-05-01","amount":250,"description":"GRANT AWARD","payer":"City","category":"Grant"}]"#;
        let ExtractionOutcome::Success(batch) = run_extraction(&PayloadExtractor, payload) else {
            panic!("expected success");
        };
        assert_eq!(batch[0].category, Category::Grant);
        assert_eq!(batch[0].amount, Money::from_cents(25000));
    }

    #[test]
    fn test_null_fields_do_not_fail_batch() {
        let payload = r#"[
            {"date":"2024-05-01","amount":250,"description":"GRANT AWARD","payer":"City","category":"Grant"},
            {"date":null,"amount":40,"description":null,"payer":null,"category":null}
        ]"#;
        let ExtractionOutcome::Success(batch) = run_extraction(&PayloadExtractor, payload) else {
            panic!("expected success");
        };
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].category, Category::Grant);
        assert_eq!(batch[1].category, Category::Other);
        assert_eq!(batch[1].payer, UNKNOWN_PAYER);
        assert_eq!(batch[1].date, "");
        assert_eq!(batch[1].amount, Money::from_cents(4000));
    }

    #[test]
    fn test_out_of_range_amount_is_dropped() {
        let payload = r#"[
            {"date":"2024-05-01","amount":1e17,"description":"BOGUS","category":"Sales"},
            {"date":"2024-05-02","amount":1,"description":"REAL","category":"Sales"}
        ]"#;
        let ExtractionOutcome::Success(mut batch) = run_extraction(&PayloadExtractor, payload)
        else {
            panic!("expected success");
        };
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].description, "REAL");

        for txn in &mut batch {
            txn.status = TransactionStatus::Verified;
        }
        let stats = crate::services::analytics::compute_stats(&batch);
        assert_eq!(stats.total_income, Money::from_cents(100));
    }

    #[test]
    fn test_candidate_blank_payer_defaults() {
        let candidate = CandidateTransaction {
            date: "2024-01-01".into(),
            amount: Money::zero(),
            description: "x".into(),
            payer: Some("   ".into()),
            category: Category::Other,
        };
        assert_eq!(candidate.into_transaction().payer, UNKNOWN_PAYER);
    }
}
