//! Fixed expense CLI commands
//!
//! Implements CLI commands for recurring bill management.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::fixed::{format_fixed_details, format_fixed_list};
use crate::error::{GastosError, GastosResult};
use crate::models::{Money, OwnerId, PaymentMethod};
use crate::services::{CreateFixedExpenseInput, FixedExpenseService};
use crate::storage::Storage;

/// Fixed expense subcommands
#[derive(Subcommand)]
pub enum FixedCommands {
    /// Add a new fixed expense
    Add {
        /// Description
        description: String,
        /// Monthly amount (e.g., "1200.00")
        amount: String,
        /// Payment method (e.g., "boleto", "débito", "pix")
        #[arg(short, long)]
        method: String,
        /// Day of the month the bill is due (1-31)
        #[arg(short, long)]
        day: u32,
        /// Category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List fixed expenses
    List,
    /// Show fixed expense details
    Show {
        /// Fixed expense ID
        id: String,
    },
    /// Edit a fixed expense
    Edit {
        /// Fixed expense ID
        id: String,
        /// New description
        #[arg(short = 'D', long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New payment method
        #[arg(short, long)]
        method: Option<String>,
        /// New due day (1-31)
        #[arg(short, long)]
        day: Option<u32>,
        /// New category ("none" to clear)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Mark the current cycle as paid
    Paid {
        /// Fixed expense ID
        id: String,
    },
    /// Clear the paid marker
    Unpaid {
        /// Fixed expense ID
        id: String,
    },
    /// Reactivate a fixed expense
    Enable {
        /// Fixed expense ID
        id: String,
    },
    /// Deactivate a fixed expense without deleting it
    Disable {
        /// Fixed expense ID
        id: String,
    },
    /// Delete a fixed expense
    Delete {
        /// Fixed expense ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a fixed expense command
pub fn handle_fixed_command(
    storage: &Storage,
    settings: &Settings,
    owner_id: OwnerId,
    today: NaiveDate,
    cmd: FixedCommands,
) -> GastosResult<()> {
    let service = FixedExpenseService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        FixedCommands::Add {
            description,
            amount,
            method,
            day,
            category,
        } => {
            let input = CreateFixedExpenseInput {
                owner_id,
                description,
                amount: parse_amount(&amount)?,
                method: PaymentMethod::parse(&method),
                due_day: day,
                category,
            };

            let bill = service.create(input)?;

            println!("Created fixed expense:");
            println!("  ID:       {}", bill.id);
            println!("  Due day:  {}", bill.due_day);
            println!("  Amount:   {}", bill.amount.format_with_symbol(symbol));
            println!("  Method:   {}", bill.method.label());
            println!("  Next due: {}", bill.next_due_date(today));
        }

        FixedCommands::List => {
            let bills = service.list(owner_id)?;
            print!("{}", format_fixed_list(&bills, today, symbol));
        }

        FixedCommands::Show { id } => {
            let bill = service.find(owner_id, &id)?;
            print!("{}", format_fixed_details(&bill, today, symbol));
        }

        FixedCommands::Edit {
            id,
            description,
            amount,
            method,
            day,
            category,
        } => {
            let bill = service.find(owner_id, &id)?;

            let new_amount = amount.map(|s| parse_amount(&s)).transpose()?;
            let new_method = method.map(|s| PaymentMethod::parse(&s));
            let new_category = category.map(|c| {
                if c.is_empty() || c.to_lowercase() == "none" {
                    None
                } else {
                    Some(c)
                }
            });

            let updated = service.update(
                owner_id,
                bill.id,
                description,
                new_amount,
                new_method,
                day,
                new_category,
            )?;

            println!("Updated fixed expense: {}", updated.id);
            println!("  Due day: {}", updated.due_day);
            println!("  Amount:  {}", updated.amount.format_with_symbol(symbol));
        }

        FixedCommands::Paid { id } => {
            let bill = service.find(owner_id, &id)?;
            let paid = service.mark_paid(owner_id, bill.id, today)?;
            match paid.paid_through {
                Some(cycle) => println!("Marked '{}' paid through {}", paid.description, cycle),
                None => println!("Marked '{}' paid", paid.description),
            }
        }

        FixedCommands::Unpaid { id } => {
            let bill = service.find(owner_id, &id)?;
            let cleared = service.clear_paid(owner_id, bill.id)?;
            println!("Cleared paid marker for '{}'", cleared.description);
        }

        FixedCommands::Enable { id } => {
            let bill = service.find(owner_id, &id)?;
            let enabled = service.set_active(owner_id, bill.id, true)?;
            println!("Activated '{}'", enabled.description);
        }

        FixedCommands::Disable { id } => {
            let bill = service.find(owner_id, &id)?;
            let disabled = service.set_active(owner_id, bill.id, false)?;
            println!(
                "Deactivated '{}'. It no longer counts toward any totals.",
                disabled.description
            );
        }

        FixedCommands::Delete { id, force } => {
            let bill = service.find(owner_id, &id)?;

            if !force {
                println!("About to delete fixed expense:");
                println!("  Description: {}", bill.description);
                println!("  Due day:     {}", bill.due_day);
                println!("  Amount:      {}", bill.amount.format_with_symbol(symbol));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(owner_id, bill.id)?;
            println!("Deleted fixed expense: {} ({})", deleted.description, deleted.id);
        }
    }

    Ok(())
}

/// Parse a money amount, naming the value on failure
fn parse_amount(value: &str) -> GastosResult<Money> {
    Money::parse(value).map_err(|e| {
        GastosError::Validation(format!(
            "Invalid amount: '{}'. Use format like '1200.00'. Error: {}",
            value, e
        ))
    })
}
