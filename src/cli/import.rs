//! CLI command handler for statement import
//!
//! Reads statement text from an argument, a file or stdin, runs it through an
//! extractor, and prepends whatever was recognized to the ledger.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::warn;

use crate::config::Settings;
use crate::display::transaction::format_transaction_register;
use crate::error::{IncomeError, IncomeResult};
use crate::extract::{run_extraction, ExtractionOutcome, OpenAiExtractor, PayloadExtractor};
use crate::storage::LedgerStore;

/// Where the statement text comes from
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Statement text to extract from (reads stdin when no source is given)
    #[arg(conflicts_with_all = ["file", "json"])]
    pub text: Option<String>,

    /// Read statement text from a file
    #[arg(short, long, conflicts_with = "json")]
    pub file: Option<PathBuf>,

    /// Import an already-extracted JSON array of records
    #[arg(long)]
    pub json: Option<PathBuf>,
}

/// Handle the import command
pub fn handle_import_command(
    store: &mut LedgerStore,
    settings: &Settings,
    args: ImportArgs,
) -> IncomeResult<()> {
    let outcome = if let Some(path) = &args.json {
        let payload = read_source(path)?;
        run_extraction(&PayloadExtractor, &payload)
    } else {
        let text = match (&args.text, &args.file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => read_source(path)?,
            (None, None) => read_stdin()?,
        };
        extract_with_service(settings, &text)
    };

    let message = outcome.user_message();
    match outcome {
        ExtractionOutcome::Success(batch) => {
            let preview = format_transaction_register(&batch, settings);
            let added = store.import(batch);
            println!("Imported {} transaction(s) as Pending:", added);
            print!("{}", preview);
            Ok(())
        }
        ExtractionOutcome::EmptyResult => {
            println!("{}", message.unwrap_or_default());
            Ok(())
        }
        ExtractionOutcome::Failure(detail) => Err(IncomeError::Extraction(format!(
            "{} ({})",
            message.unwrap_or_default(),
            detail
        ))),
    }
}

fn extract_with_service(settings: &Settings, text: &str) -> ExtractionOutcome {
    if text.trim().is_empty() {
        return ExtractionOutcome::EmptyResult;
    }
    match OpenAiExtractor::from_settings(settings) {
        Ok(extractor) => run_extraction(&extractor, text),
        Err(e) if e.is_validation() => {
            warn!(error = %e, "extraction service is misconfigured");
            ExtractionOutcome::Failure(e.to_string())
        }
        Err(e) => {
            warn!(error = %e, "extraction service unavailable");
            ExtractionOutcome::Failure(e.to_string())
        }
    }
}

fn read_source(path: &Path) -> IncomeResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| IncomeError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

fn read_stdin() -> IncomeResult<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
