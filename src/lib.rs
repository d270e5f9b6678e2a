//! IncomeFlow - terminal income ledger with assisted statement import
//!
//! Raw bank statement text is handed to an extraction service, the recognized
//! credits are prepended to a persisted ledger as `Pending`, and the user
//! verifies, rejects or re-categorizes them. Summary statistics and
//! breakdowns are always derived from the current ledger.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Transactions, money, categories, statuses and stats
//! - `storage`: Blob persistence and the authoritative ledger store
//! - `services`: Pure ledger operations (import, workflow, analytics, query)
//! - `extract`: Extraction service boundary
//! - `display` / `export`: Terminal formatting and file export
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,no_run
//! use incomeflow::config::{IncomePaths, Settings};
//! use incomeflow::storage::open_ledger;
//!
//! # fn main() -> Result<(), incomeflow::IncomeError> {
//! let paths = IncomePaths::new()?;
//! let _settings = Settings::load_or_create(&paths)?;
//! let store = open_ledger(&paths)?;
//! println!("{} transactions, {}", store.len(), store.stats().total_income);
//! # Ok(())
//! # }
//! ```

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod extract;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{IncomeError, IncomeResult};

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "incomeflow=warn";

/// Initializes the global tracing subscriber, logging to stderr
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects debug output for
/// this crate.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if verbose {
            EnvFilter::new("incomeflow=debug")
        } else {
            EnvFilter::new(DEFAULT_LOG_FILTER)
        };

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init();
    });
}
