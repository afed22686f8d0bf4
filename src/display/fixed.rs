//! Fixed expense display formatting
//!
//! Provides utilities for formatting recurring bills for terminal display.
//! Status is derived against "today" for active bills; inactive bills show
//! a flat marker instead.

use chrono::NaiveDate;

use crate::display::expense::truncate;
use crate::models::FixedExpenseRecord;
use crate::services::DerivedStatus;

/// Format a single fixed expense for display (list row)
pub fn format_fixed_row(bill: &FixedExpenseRecord, today: NaiveDate, currency_symbol: &str) -> String {
    let status_label = if bill.active {
        DerivedStatus::of_fixed(bill, today).to_string()
    } else {
        "Inactive".to_string()
    };

    format!(
        "{:<9} {:>3}  {:<32} {:<18} {:>12}",
        status_label,
        bill.due_day,
        truncate(&bill.description, 32),
        truncate(bill.method.label(), 18),
        bill.amount.format_with_symbol(currency_symbol)
    )
}

/// Format a list of fixed expenses as a table
pub fn format_fixed_list(
    bills: &[FixedExpenseRecord],
    today: NaiveDate,
    currency_symbol: &str,
) -> String {
    if bills.is_empty() {
        return "No fixed expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<9} {:>3}  {:<32} {:<18} {:>12}\n",
        "Status", "Day", "Description", "Method", "Amount"
    ));
    output.push_str(&"-".repeat(79));
    output.push('\n');

    for bill in bills {
        output.push_str(&format_fixed_row(bill, today, currency_symbol));
        output.push('\n');
    }

    let monthly_total = bills
        .iter()
        .filter(|b| b.active)
        .fold(crate::models::Money::zero(), |acc, b| acc + b.amount);
    output.push_str(&format!(
        "\nActive monthly total: {}\n",
        monthly_total.format_with_symbol(currency_symbol)
    ));

    output
}

/// Format fixed expense details for display
pub fn format_fixed_details(
    bill: &FixedExpenseRecord,
    today: NaiveDate,
    currency_symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Fixed expense: {}\n", bill.id));
    output.push_str(&format!("Description:   {}\n", bill.description));
    output.push_str(&format!(
        "Amount:        {}\n",
        bill.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Method:        {}\n", bill.method.label()));
    output.push_str(&format!("Due day:       {}\n", bill.due_day));

    if let Some(category) = &bill.category {
        output.push_str(&format!("Category:      {}\n", category));
    }

    if bill.active {
        output.push_str(&format!(
            "Next due:      {}\n",
            bill.next_due_date(today).format("%Y-%m-%d")
        ));
        output.push_str(&format!(
            "Status:        {}\n",
            DerivedStatus::of_fixed(bill, today)
        ));
    } else {
        output.push_str("Status:        Inactive\n");
    }

    if let Some(paid_through) = bill.paid_through {
        output.push_str(&format!("Paid through:  {}\n", paid_through));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, OwnerId, PaymentMethod};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rent() -> FixedExpenseRecord {
        FixedExpenseRecord::new(
            OwnerId::new(),
            "Aluguel",
            Money::from_cents(120_000),
            PaymentMethod::BankSlip,
            10,
        )
    }

    #[test]
    fn test_format_fixed_row_active() {
        let formatted = format_fixed_row(&rent(), date(2025, 6, 5), "R$");

        assert!(formatted.contains("Due soon"));
        assert!(formatted.contains("Aluguel"));
        assert!(formatted.contains("R$1200.00"));
    }

    #[test]
    fn test_format_fixed_row_inactive() {
        let mut bill = rent();
        bill.set_active(false);

        let formatted = format_fixed_row(&bill, date(2025, 6, 5), "R$");
        assert!(formatted.contains("Inactive"));
    }

    #[test]
    fn test_format_fixed_list_totals_active_only() {
        let mut gym = FixedExpenseRecord::new(
            OwnerId::new(),
            "Academia",
            Money::from_cents(15_000),
            PaymentMethod::Debit,
            20,
        );
        gym.set_active(false);

        let formatted = format_fixed_list(&[rent(), gym], date(2025, 6, 5), "R$");
        assert!(formatted.contains("Active monthly total: R$1200.00"));
    }

    #[test]
    fn test_format_empty_list() {
        let formatted = format_fixed_list(&[], date(2025, 6, 5), "R$");
        assert!(formatted.contains("No fixed expenses found"));
    }

    #[test]
    fn test_format_fixed_details() {
        let mut bill = rent();
        bill.mark_paid_for(crate::models::Month::new(2025, 6));

        let formatted = format_fixed_details(&bill, date(2025, 6, 5), "R$");
        assert!(formatted.contains("Due day:       10"));
        assert!(formatted.contains("Next due:      2025-06-10"));
        assert!(formatted.contains("Status:        Paid"));
        assert!(formatted.contains("Paid through:  2025-06"));
    }
}
