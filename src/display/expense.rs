//! Expense display formatting
//!
//! Provides utilities for formatting expenses for terminal display,
//! including the paginated list view and per-record details.

use crate::models::ExpenseRecord;
use crate::services::{DerivedStatus, ExpenseView};

/// Format a single expense for display (list row)
pub fn format_expense_row(
    expense: &ExpenseRecord,
    status: DerivedStatus,
    currency_symbol: &str,
) -> String {
    format!(
        "{:<9} {} {:<32} {:<18} {:>12}",
        status.to_string(),
        expense.due_date.format("%Y-%m-%d"),
        truncate(&expense.description, 32),
        truncate(expense.method.label(), 18),
        expense.amount.format_with_symbol(currency_symbol)
    )
}

/// Format a filtered, paginated view as a table
pub fn format_expense_list(view: &ExpenseView, currency_symbol: &str) -> String {
    if view.total == 0 {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<9} {:<10} {:<32} {:<18} {:>12}\n",
        "Status", "Due", "Description", "Method", "Amount"
    ));
    output.push_str(&"-".repeat(86));
    output.push('\n');

    for (expense, status) in &view.entries {
        output.push_str(&format_expense_row(expense, *status, currency_symbol));
        output.push('\n');
    }

    output.push_str(&format!(
        "\nPage {} of {} ({} record{})\n",
        view.page,
        view.page_count,
        view.total,
        if view.total == 1 { "" } else { "s" }
    ));

    output
}

/// Format expense details for display
pub fn format_expense_details(
    expense: &ExpenseRecord,
    status: DerivedStatus,
    currency_symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Method:      {}\n", expense.method.label()));
    output.push_str(&format!(
        "Due date:    {}\n",
        expense.due_date.format("%Y-%m-%d")
    ));

    if expense.installment_count > 1 {
        output.push_str(&format!(
            "Installment: {}/{}\n",
            expense.installment_index, expense.installment_count
        ));
    }

    if let Some(category) = &expense.category {
        output.push_str(&format!("Category:    {}\n", category));
    }

    output.push_str(&format!("Status:      {}\n", status));

    output
}

/// Truncate a string to a maximum display width
///
/// Operates on characters, not bytes; descriptions carry accented text.
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    let len = s.chars().count();
    if len <= max_len {
        let pad = max_len - len;
        format!("{}{}", s, " ".repeat(pad))
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, OwnerId, PaymentMethod};
    use crate::services::{view, ExpenseFilter};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sofa() -> ExpenseRecord {
        let mut expense = ExpenseRecord::new(
            OwnerId::new(),
            "Sofá - Parcela 1/4",
            Money::from_cents(25_000),
            PaymentMethod::CreditCard,
            date(2025, 1, 31),
        );
        expense.installment_index = 1;
        expense.installment_count = 4;
        expense
    }

    #[test]
    fn test_format_expense_row() {
        let formatted = format_expense_row(&sofa(), DerivedStatus::Overdue, "R$");

        assert!(formatted.contains("Overdue"));
        assert!(formatted.contains("2025-01-31"));
        assert!(formatted.contains("Sofá - Parcela 1/4"));
        assert!(formatted.contains("R$250.00"));
    }

    #[test]
    fn test_format_empty_list() {
        let empty = view(&[], &ExpenseFilter::new(), date(2025, 6, 1));
        let formatted = format_expense_list(&empty, "R$");
        assert!(formatted.contains("No expenses found"));
    }

    #[test]
    fn test_format_list_includes_page_footer() {
        let records = vec![sofa()];
        let page = view(&records, &ExpenseFilter::new(), date(2025, 3, 15));

        let formatted = format_expense_list(&page, "R$");
        assert!(formatted.contains("Status"));
        assert!(formatted.contains("Page 1 of 1 (1 record)"));
    }

    #[test]
    fn test_format_expense_details() {
        let formatted = format_expense_details(&sofa(), DerivedStatus::Overdue, "R$");

        assert!(formatted.contains("Sofá - Parcela 1/4"));
        assert!(formatted.contains("Installment: 1/4"));
        assert!(formatted.contains("Status:      Overdue"));
    }

    #[test]
    fn test_details_hides_installment_for_single() {
        let single = ExpenseRecord::new(
            OwnerId::new(),
            "Mercado",
            Money::from_cents(9_900),
            PaymentMethod::Pix,
            date(2025, 6, 10),
        );

        let formatted = format_expense_details(&single, DerivedStatus::Upcoming, "R$");
        assert!(!formatted.contains("Installment:"));
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        // Accented chars take two bytes; slicing must not split them
        let result = truncate("Crédito às cegas e além", 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with("..."));

        assert_eq!(truncate("Sofá", 6), "Sofá  ");
    }
}
