//! Expense CLI commands
//!
//! Implements CLI commands for variable expense management, including
//! installment purchases.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::expense::{format_expense_details, format_expense_list};
use crate::error::{GastosError, GastosResult};
use crate::models::{Money, OwnerId, PaymentMethod};
use crate::services::{DerivedStatus, ExpenseFilter, ExpenseService, InstallmentPlan};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense, split into installments when requested
    Add {
        /// Description
        description: String,
        /// Total amount (e.g., "1000.00")
        amount: String,
        /// Payment method (e.g., "pix", "cartão de crédito", "boleto")
        #[arg(short, long)]
        method: String,
        /// First due date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        due: Option<String>,
        /// Number of installments
        #[arg(short, long)]
        installments: Option<u32>,
        /// Category
        #[arg(short, long)]
        category: Option<String>,
        /// Mark installments due before this date (YYYY-MM-DD) as already paid
        #[arg(long)]
        paid_before: Option<String>,
    },
    /// List expenses
    List {
        /// Filter by description substring (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Start of due date range (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End of due date range (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Filter by status (overdue, due-soon, upcoming, paid)
        #[arg(long)]
        status: Option<String>,
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: usize,
        /// Records per page
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Show expense details
    Show {
        /// Expense ID
        id: String,
    },
    /// Edit an expense
    Edit {
        /// Expense ID
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
        /// New due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<String>,
        /// New category ("none" to clear)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Mark an expense as paid
    Paid {
        /// Expense ID
        id: String,
    },
    /// Mark an expense as not paid
    Unpaid {
        /// Expense ID
        id: String,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    owner_id: OwnerId,
    today: NaiveDate,
    cmd: ExpenseCommands,
) -> GastosResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            method,
            due,
            installments,
            category,
            paid_before,
        } => {
            let total_amount = parse_amount(&amount)?;
            let start_date = match due {
                Some(date_str) => parse_date(&date_str, "due")?,
                None => today,
            };
            let paid_before = paid_before
                .map(|s| parse_date(&s, "paid-before"))
                .transpose()?;

            let plan = InstallmentPlan {
                owner_id,
                description,
                total_amount,
                method: PaymentMethod::parse(&method),
                start_date,
                installment_count: installments,
                category,
                paid_before,
            };

            let records = service.create(plan)?;

            if records.len() == 1 {
                let expense = &records[0];
                println!("Created expense:");
                println!("  ID:     {}", expense.id);
                println!("  Due:    {}", expense.due_date);
                println!("  Amount: {}", expense.amount.format_with_symbol(symbol));
                println!("  Method: {}", expense.method.label());
            } else {
                println!(
                    "Created {} installments totalling {}:",
                    records.len(),
                    total_amount.format_with_symbol(symbol)
                );
                for expense in &records {
                    println!(
                        "  {}/{}  {}  {:>12}  {}",
                        expense.installment_index,
                        expense.installment_count,
                        expense.due_date,
                        expense.amount.format_with_symbol(symbol),
                        if expense.paid { "(paid)" } else { "" }
                    );
                }
            }
        }

        ExpenseCommands::List {
            search,
            from,
            to,
            status,
            page,
            page_size,
        } => {
            let mut filter = ExpenseFilter::new()
                .page(page)
                .page_size(page_size.unwrap_or(settings.default_page_size));

            if let Some(text) = search {
                filter = filter.matching(text);
            }
            if let Some(from_str) = from {
                filter = filter.due_from(parse_date(&from_str, "from")?);
            }
            if let Some(to_str) = to {
                filter = filter.due_until(parse_date(&to_str, "to")?);
            }
            if let Some(status_str) = status {
                let status = DerivedStatus::parse(&status_str).ok_or_else(|| {
                    GastosError::Validation(format!(
                        "Invalid status: '{}'. Use overdue, due-soon, upcoming, or paid",
                        status_str
                    ))
                })?;
                filter = filter.with_status(status);
            }

            let page = service.view(owner_id, &filter, today)?;
            print!("{}", format_expense_list(&page, symbol));
        }

        ExpenseCommands::Show { id } => {
            let expense = service.find(owner_id, &id)?;
            let status = DerivedStatus::of_expense(&expense, today);
            print!("{}", format_expense_details(&expense, status, symbol));
        }

        ExpenseCommands::Edit {
            id,
            description,
            amount,
            method,
            due,
            category,
        } => {
            let expense = service.find(owner_id, &id)?;

            let new_amount = amount.map(|s| parse_amount(&s)).transpose()?;
            let new_due = due.map(|s| parse_date(&s, "due")).transpose()?;
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
                expense.id,
                description,
                new_amount,
                new_method,
                new_due,
                new_category,
            )?;

            println!("Updated expense: {}", updated.id);
            println!("  Due:    {}", updated.due_date);
            println!("  Amount: {}", updated.amount.format_with_symbol(symbol));
        }

        ExpenseCommands::Paid { id } => {
            let expense = service.find(owner_id, &id)?;
            let paid = service.set_paid(owner_id, expense.id, true)?;
            println!("Marked as paid: {} ({})", paid.description, paid.id);
        }

        ExpenseCommands::Unpaid { id } => {
            let expense = service.find(owner_id, &id)?;
            let unpaid = service.set_paid(owner_id, expense.id, false)?;
            println!("Marked as not paid: {} ({})", unpaid.description, unpaid.id);
        }

        ExpenseCommands::Delete { id, force } => {
            let expense = service.find(owner_id, &id)?;

            if !force {
                println!("About to delete expense:");
                println!("  Description: {}", expense.description);
                println!("  Due:         {}", expense.due_date);
                println!("  Amount:      {}", expense.amount.format_with_symbol(symbol));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(owner_id, expense.id)?;
            println!("Deleted expense: {} ({})", deleted.description, deleted.id);
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

/// Parse a date argument, naming the offending field on failure
fn parse_date(value: &str, field: &str) -> GastosResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        GastosError::Validation(format!(
            "Invalid {} date: '{}'. Use YYYY-MM-DD",
            field, value
        ))
    })
}
