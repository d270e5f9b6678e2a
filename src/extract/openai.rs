//! OpenAI-compatible extraction backend
//!
//! Sends statement text to any server implementing `/v1/chat/completions`
//! (hosted OpenAI, vLLM, LocalAI, llama-server) and parses the returned
//! array of candidate records.
//!
//! # Configuration
//!
//! Environment variables take precedence over settings:
//! - `INCOMEFLOW_AI_HOST`: server URL (required unless `ai_host` is set)
//! - `INCOMEFLOW_AI_MODEL`: model name (default from settings)
//! - `INCOMEFLOW_AI_API_KEY`: bearer token, if the server wants one

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Settings;
use crate::error::{IncomeError, IncomeResult};

use super::parsing::parse_candidates;
use super::{CandidateTransaction, Extractor};

pub const HOST_ENV: &str = "INCOMEFLOW_AI_HOST";
pub const MODEL_ENV: &str = "INCOMEFLOW_AI_MODEL";
pub const API_KEY_ENV: &str = "INCOMEFLOW_AI_API_KEY";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const SYSTEM_PROMPT: &str = "\
You are an expert financial accountant. Parse raw unstructured text, CSV lines, or bank \
statement snippets into structured financial data.
Focus ONLY on CREDIT or DEPOSIT transactions (incomes). Ignore debits or withdrawals unless \
explicitly marked as a refund (positive flow).
Infer the 'payer' from the description if possible.
Categorize each transaction into one of: 'Sales', 'Service Revenue', 'Investment', 'Refund', \
'Grant', 'Other'.
Dates must be ISO 8601 (YYYY-MM-DD). Amounts must be positive numbers.
Reply with only a JSON array of objects with the keys \
date, amount, description, payer, category. Reply with [] if there is no income.";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Extraction backend talking to an OpenAI-compatible server
#[derive(Debug, Clone)]
pub struct OpenAiExtractor {
    http_client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiExtractor {
    pub fn new(base_url: &str, model: &str, api_key: Option<String>) -> IncomeResult<Self> {
        let base_url = base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(IncomeError::Validation(format!(
                "Extraction service URL must start with http:// or https://: '{}'",
                base_url
            )));
        }
        if model.trim().is_empty() {
            return Err(IncomeError::Validation(
                "Extraction model name cannot be empty".into(),
            ));
        }

        let http_client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| IncomeError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        })
    }

    /// Build from environment variables, falling back to settings
    pub fn from_settings(settings: &Settings) -> IncomeResult<Self> {
        let host = std::env::var(HOST_ENV)
            .ok()
            .filter(|h| !h.trim().is_empty())
            .or_else(|| settings.ai_host.clone())
            .ok_or_else(|| {
                IncomeError::Config(format!(
                    "No extraction service configured; set {} or ai_host in config.json",
                    HOST_ENV
                ))
            })?;
        let model = std::env::var(MODEL_ENV).unwrap_or_else(|_| settings.ai_model.clone());
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());

        Self::new(&host, &model, api_key)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    fn build_request(&self, raw_text: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!(
                        "Extract income transactions from the following bank statement text:\n\n{}",
                        raw_text
                    ),
                },
            ],
            temperature: 0.1,
            stream: false,
        }
    }

    fn chat_completion(&self, raw_text: &str) -> IncomeResult<String> {
        let request = self.build_request(raw_text);
        debug!(endpoint = %self.endpoint(), model = %self.model, "sending extraction request");

        let mut req_builder = self.http_client.post(self.endpoint()).json(&request);
        if let Some(ref api_key) = self.api_key {
            req_builder = req_builder.bearer_auth(api_key);
        }

        let response = req_builder.send()?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(IncomeError::Extraction(format!(
                "Extraction service error {}: {}",
                status, body
            )));
        }

        let chat_response: ChatCompletionResponse = response.json()?;
        first_choice(chat_response)
    }
}

fn first_choice(response: ChatCompletionResponse) -> IncomeResult<String> {
    response
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or_else(|| IncomeError::Extraction("No response from extraction service".into()))
}

impl Extractor for OpenAiExtractor {
    fn extract(&self, raw_text: &str) -> IncomeResult<Vec<CandidateTransaction>> {
        let content = self.chat_completion(raw_text)?;
        parse_candidates(&content)
    }
}
