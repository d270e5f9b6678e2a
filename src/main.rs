use anyhow::Result;
use clap::{Parser, Subcommand};

use incomeflow::cli::{
    handle_export_command, handle_import_command, handle_stats_command,
    handle_transaction_command, ExportArgs, ImportArgs, StatsArgs, TransactionCommands,
};
use incomeflow::config::{paths::DATA_DIR_ENV, IncomePaths, Settings};
use incomeflow::extract::openai::{HOST_ENV, MODEL_ENV};
use incomeflow::storage::{open_ledger, LEDGER_KEY};

#[derive(Parser)]
#[command(
    name = "incomeflow",
    author = "Kaylee Beyene",
    version,
    about = "Terminal income ledger with assisted statement import",
    long_about = "IncomeFlow turns pasted bank statement text into a ledger of income \
                  transactions. Imported entries start as Pending; verify or reject \
                  them to keep totals honest."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract income transactions from statement text and add them
    Import(ImportArgs),

    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Show income statistics with category and month breakdowns
    Stats(StatsArgs),

    /// Export transactions as CSV, JSON or YAML
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    incomeflow::init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = IncomePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("IncomeFlow - income ledger with assisted statement import");
        println!();
        println!("Run 'incomeflow --help' for usage information.");
        println!("Run 'incomeflow import --file statement.txt' to get started.");
        return Ok(());
    };

    match command {
        Commands::Import(args) => {
            handle_import_command(&mut open_ledger(&paths)?, &settings, args)?
        }
        Commands::Transaction(cmd) => {
            handle_transaction_command(&mut open_ledger(&paths)?, &settings, cmd)?
        }
        Commands::Stats(args) => handle_stats_command(&open_ledger(&paths)?, &settings, args)?,
        Commands::Export(args) => handle_export_command(&open_ledger(&paths)?, args)?,
        Commands::Config => print_config(&paths, &settings),
    }

    Ok(())
}

fn print_config(paths: &IncomePaths, settings: &Settings) {
    println!("IncomeFlow Configuration");
    println!("========================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Ledger file:      {}.json", paths.data_dir().join(LEDGER_KEY).display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("  ({} overrides the base directory)", DATA_DIR_ENV);
    println!();
    println!("Settings:");
    println!("  Currency symbol:    {}", settings.currency_symbol);
    println!("  Date format:        {}", settings.date_format);
    println!("  Recent limit:       {}", settings.recent_limit);
    println!(
        "  Extraction host:    {}",
        settings.ai_host.as_deref().unwrap_or("(not set)")
    );
    println!("  Extraction model:   {}", settings.ai_model);
    println!("  ({} and {} override these)", HOST_ENV, MODEL_ENV);
}
