//! Dashboard CLI command
//!
//! Renders the aggregated monthly summary for the terminal.

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::error::GastosResult;
use crate::models::OwnerId;
use crate::reports::DashboardSummary;
use crate::services::{ExpenseService, FixedExpenseService};
use crate::storage::Storage;

/// Handle the dashboard command
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    owner_id: OwnerId,
    today: NaiveDate,
) -> GastosResult<()> {
    let expenses = ExpenseService::new(storage).list(owner_id)?;
    let fixed = FixedExpenseService::new(storage).list(owner_id)?;

    let summary = DashboardSummary::generate(&expenses, &fixed, today);
    print!("{}", summary.format_terminal(&settings.currency_symbol));

    Ok(())
}
