//! CLI commands for data export
//!
//! Provides commands for exporting expense data to CSV files.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::error::{GastosError, GastosResult};
use crate::export::{export_expenses_csv, export_fixed_csv};
use crate::models::OwnerId;
use crate::services::{ExpenseService, FixedExpenseService};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export expenses to CSV
    Expenses {
        /// Output file path
        output: PathBuf,
    },
    /// Export fixed expenses to CSV
    Fixed {
        /// Output file path
        output: PathBuf,
    },
}

/// Handle export commands
pub fn handle_export_command(
    storage: &Storage,
    owner_id: OwnerId,
    today: NaiveDate,
    cmd: ExportCommands,
) -> GastosResult<()> {
    match cmd {
        ExportCommands::Expenses { output } => {
            let expenses = ExpenseService::new(storage).list(owner_id)?;
            let mut writer = create_output(&output)?;
            export_expenses_csv(&expenses, today, &mut writer)?;
            println!(
                "Exported {} expense{} to: {}",
                expenses.len(),
                if expenses.len() == 1 { "" } else { "s" },
                output.display()
            );
        }
        ExportCommands::Fixed { output } => {
            let bills = FixedExpenseService::new(storage).list(owner_id)?;
            let mut writer = create_output(&output)?;
            export_fixed_csv(&bills, today, &mut writer)?;
            println!(
                "Exported {} fixed expense{} to: {}",
                bills.len(),
                if bills.len() == 1 { "" } else { "s" },
                output.display()
            );
        }
    }

    Ok(())
}

fn create_output(output: &PathBuf) -> GastosResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        GastosError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
