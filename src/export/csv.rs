//! CSV Export functionality
//!
//! Exports expense and fixed-bill data to CSV format, spreadsheet-compatible.
//! Status columns carry the same derived classification the list views show.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{GastosError, GastosResult};
use crate::models::{ExpenseRecord, FixedExpenseRecord};
use crate::services::DerivedStatus;

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(
    expenses: &[ExpenseRecord],
    today: NaiveDate,
    writer: &mut W,
) -> GastosResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "ID",
            "Description",
            "Amount",
            "Method",
            "Due Date",
            "Installment",
            "Category",
            "Status",
            "Paid",
        ])
        .map_err(|e| GastosError::Export(e.to_string()))?;

    for expense in expenses {
        let status = DerivedStatus::of_expense(expense, today);
        let installment = if expense.installment_count > 1 {
            format!("{}/{}", expense.installment_index, expense.installment_count)
        } else {
            String::new()
        };

        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.description.clone(),
                format!("{:.2}", expense.amount.cents() as f64 / 100.0),
                expense.method.label().to_string(),
                expense.due_date.format("%Y-%m-%d").to_string(),
                installment,
                expense.category.clone().unwrap_or_default(),
                status.to_string(),
                expense.paid.to_string(),
            ])
            .map_err(|e| GastosError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| GastosError::Export(e.to_string()))?;

    Ok(())
}

/// Export fixed expenses to CSV
pub fn export_fixed_csv<W: Write>(
    bills: &[FixedExpenseRecord],
    today: NaiveDate,
    writer: &mut W,
) -> GastosResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "ID",
            "Description",
            "Amount",
            "Method",
            "Due Day",
            "Category",
            "Active",
            "Next Due",
            "Status",
            "Paid Through",
        ])
        .map_err(|e| GastosError::Export(e.to_string()))?;

    for bill in bills {
        let (next_due, status) = if bill.active {
            (
                bill.next_due_date(today).format("%Y-%m-%d").to_string(),
                DerivedStatus::of_fixed(bill, today).to_string(),
            )
        } else {
            (String::new(), "Inactive".to_string())
        };

        csv_writer
            .write_record([
                bill.id.to_string(),
                bill.description.clone(),
                format!("{:.2}", bill.amount.cents() as f64 / 100.0),
                bill.method.label().to_string(),
                bill.due_day.to_string(),
                bill.category.clone().unwrap_or_default(),
                bill.active.to_string(),
                next_due,
                status,
                bill.paid_through.map(|m| m.to_string()).unwrap_or_default(),
            ])
            .map_err(|e| GastosError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| GastosError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, OwnerId, PaymentMethod};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_export_expenses_csv() {
        let mut expense = ExpenseRecord::new(
            OwnerId::new(),
            "Sofá - Parcela 2/4",
            Money::from_cents(25_000),
            PaymentMethod::CreditCard,
            date(2025, 2, 28),
        );
        expense.installment_index = 2;
        expense.installment_count = 4;
        expense.category = Some("Casa".to_string());

        let mut csv_output = Vec::new();
        export_expenses_csv(&[expense], date(2025, 3, 15), &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.contains("ID,Description,Amount"));
        assert!(csv_string.contains("Sofá - Parcela 2/4"));
        assert!(csv_string.contains("250.00"));
        assert!(csv_string.contains("2/4"));
        assert!(csv_string.contains("Overdue"));
    }

    #[test]
    fn test_export_quotes_embedded_commas() {
        let expense = ExpenseRecord::new(
            OwnerId::new(),
            "Mesa, cadeiras e armário",
            Money::from_cents(80_000),
            PaymentMethod::Pix,
            date(2025, 6, 10),
        );

        let mut csv_output = Vec::new();
        export_expenses_csv(&[expense], date(2025, 6, 1), &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.contains("\"Mesa, cadeiras e armário\""));
    }

    #[test]
    fn test_export_fixed_csv() {
        let mut bill = FixedExpenseRecord::new(
            OwnerId::new(),
            "Aluguel",
            Money::from_cents(120_000),
            PaymentMethod::BankSlip,
            10,
        );
        bill.mark_paid_for(crate::models::Month::new(2025, 6));

        let mut inactive = FixedExpenseRecord::new(
            OwnerId::new(),
            "Academia",
            Money::from_cents(15_000),
            PaymentMethod::Debit,
            20,
        );
        inactive.set_active(false);

        let mut csv_output = Vec::new();
        export_fixed_csv(&[bill, inactive], date(2025, 6, 5), &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.contains("Aluguel"));
        assert!(csv_string.contains("2025-06-10"));
        assert!(csv_string.contains("Paid"));
        assert!(csv_string.contains("2025-06"));
        assert!(csv_string.contains("Inactive"));
    }
}
