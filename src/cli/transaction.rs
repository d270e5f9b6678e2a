//! Transaction CLI commands
//!
//! Listing, review workflow and housekeeping for ledger records. A record is
//! addressed by its full UUID, its `txn-` short form, or a unique hex prefix.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{
    format_date, format_transaction_details, format_transaction_register,
};
use crate::error::{IncomeError, IncomeResult};
use crate::models::{Category, Transaction, TransactionStatus};
use crate::services::recent;
use crate::storage::LedgerStore;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// List transactions, newest first
    #[command(alias = "ls")]
    List {
        /// Case-insensitive match on payer, description or amount
        #[arg(short, long, default_value = "")]
        query: String,
        /// Maximum number of rows to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show the most recent transactions
    Recent,
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Mark a transaction as verified
    Verify {
        /// Transaction ID
        id: String,
    },
    /// Mark a transaction as rejected (excluded from totals)
    Reject {
        /// Transaction ID
        id: String,
    },
    /// Return a transaction to pending review
    Reopen {
        /// Transaction ID
        id: String,
    },
    /// Set a transaction's status
    Status {
        /// Transaction ID
        id: String,
        /// New status (pending, verified, rejected)
        status: TransactionStatus,
    },
    /// Change a transaction's category
    Categorize {
        /// Transaction ID
        id: String,
        /// New category (sales, service revenue, investment, refund, grant, other)
        category: Category,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &mut LedgerStore,
    settings: &Settings,
    cmd: TransactionCommands,
) -> IncomeResult<()> {
    match cmd {
        TransactionCommands::List { query, limit } => {
            let mut view = store.filter_and_sort(&query);
            let matched = view.len();
            if let Some(limit) = limit {
                view.truncate(limit);
            }
            print!("{}", format_transaction_register(&view, settings));
            if view.len() < matched {
                println!("({} of {} shown)", view.len(), matched);
            }
        }

        TransactionCommands::Recent => {
            let view = recent(store.transactions(), settings.recent_limit);
            print!("{}", format_transaction_register(&view, settings));
        }

        TransactionCommands::Show { id } => {
            if let Some(txn) = lookup(store, &id) {
                print!("{}", format_transaction_details(txn, settings));
            }
        }

        TransactionCommands::Verify { id } => {
            set_status(store, &id, TransactionStatus::Verified);
        }

        TransactionCommands::Reject { id } => {
            set_status(store, &id, TransactionStatus::Rejected);
        }

        TransactionCommands::Reopen { id } => {
            set_status(store, &id, TransactionStatus::Pending);
        }

        TransactionCommands::Status { id, status } => {
            set_status(store, &id, status);
        }

        TransactionCommands::Categorize { id, category } => {
            if let Some(txn_id) = lookup(store, &id).map(|t| t.id) {
                store.update_category(txn_id, category);
                println!("Categorized transaction {} as {}", txn_id, category);
            }
        }

        TransactionCommands::Delete { id, force } => {
            let Some(txn) = lookup(store, &id).cloned() else {
                return Ok(());
            };

            if !force {
                println!("About to delete transaction:");
                println!("  Date:   {}", format_date(&txn, &settings.date_format));
                println!(
                    "  Amount: {}",
                    txn.amount.format_with_symbol(&settings.currency_symbol)
                );
                println!("  Payer:  {}", txn.payer);
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            store.delete(txn.id);
            println!("Deleted transaction: {} ({} {})", txn.id, txn.date, txn.payer);
        }
    }

    Ok(())
}

/// Resolve a user-typed identifier, reporting when nothing matches
fn lookup<'a>(store: &'a LedgerStore, id: &str) -> Option<&'a Transaction> {
    let found = store.find(id);
    if found.is_none() {
        println!("{}", IncomeError::transaction_not_found(id));
    }
    found
}

fn set_status(store: &mut LedgerStore, id: &str, status: TransactionStatus) {
    if let Some(txn_id) = lookup(store, id).map(|t| t.id) {
        store.update_status(txn_id, status);
        println!("Marked transaction {} as {}", txn_id, status);
    }
}
