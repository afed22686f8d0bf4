use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use gastos::clock::{Clock, FixedClock, SystemClock};
use gastos::cli::{
    handle_dashboard_command, handle_expense_command, handle_export_command, handle_fixed_command,
    handle_history_command, ExpenseCommands, ExportCommands, FixedCommands,
};
use gastos::config::{paths::GastosPaths, settings::Settings};
use gastos::storage::Storage;

#[derive(Parser)]
#[command(
    name = "gastos",
    version,
    about = "Terminal-based expense tracker with installment scheduling",
    long_about = "gastos-cli tracks variable expenses and recurring bills from \
                  the command line. Purchases can be split into monthly \
                  installments, and every listing derives its overdue/due-soon \
                  status from the calendar on each run."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "e")]
    Expense(ExpenseCommands),

    /// Fixed expense management commands
    #[command(subcommand, alias = "f")]
    Fixed(FixedCommands),

    /// Show the monthly summary dashboard
    #[command(alias = "dash")]
    Dashboard,

    /// Export data to CSV
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = GastosPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let owner_id = settings.resolve_owner(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let today = resolve_clock().today();

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, owner_id, today, cmd)?;
        }
        Some(Commands::Fixed(cmd)) => {
            handle_fixed_command(&storage, &settings, owner_id, today, cmd)?;
        }
        Some(Commands::Dashboard) => {
            handle_dashboard_command(&storage, &settings, owner_id, today)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, owner_id, today, cmd)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initialized gastos-cli at: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Run 'gastos expense add --help' to record your first expense.");
        }
        Some(Commands::Config) => {
            println!("gastos-cli Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Default page size: {}", settings.default_page_size);
        }
        None => {
            println!("gastos-cli - Terminal-based expense tracker");
            println!();
            println!("Run 'gastos --help' for usage information.");
            println!("Run 'gastos dashboard' for the monthly summary.");
        }
    }

    Ok(())
}

/// Resolve the clock for this invocation
///
/// `GASTOS_TODAY` (YYYY-MM-DD) pins the date, used for tests and replays.
fn resolve_clock() -> Box<dyn Clock> {
    if let Ok(value) = std::env::var("GASTOS_TODAY") {
        if let Ok(date) = NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
            return Box::new(FixedClock(date));
        }
    }
    Box::new(SystemClock)
}
