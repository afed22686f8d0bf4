//! Dashboard Summary
//!
//! Aggregates the month-to-month numbers shown on the dashboard: per-method
//! totals for the current month, the trailing six-month series, the card
//! total, a trailing three-month average, and the overdue backlog. Everything
//! is derived from the records on every call; nothing here is cached or
//! persisted.

use chrono::NaiveDate;

use crate::models::{ExpenseRecord, FixedExpenseRecord, Money, Month, PaymentMethod};
use crate::services::status::DerivedStatus;

/// How many months the trailing total series covers
pub const TRAILING_MONTHS: usize = 6;

/// How many months the trailing average covers
pub const AVERAGE_MONTHS: usize = 3;

/// Dashboard Summary
///
/// Fixed bills contribute through their next occurrence: a bill whose day
/// already passed this month lands in next month's bucket, except for the
/// trailing average, where every active bill counts in every month.
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    /// The month the summary is centered on
    pub month: Month,
    /// Current month totals per payment method, largest first
    pub current_month_by_method: Vec<(PaymentMethod, Money)>,
    /// Total across all methods for the current month
    pub current_month_total: Money,
    /// Current month total restricted to the credit-card family
    pub current_month_card_total: Money,
    /// One total per month, oldest first, ending with the current month
    pub trailing_six_month_totals: Vec<(Month, Money)>,
    /// Mean monthly outlay over the last three months
    pub trailing_three_month_average: Money,
    /// Sum of everything currently overdue
    pub overdue_total: Money,
    /// Number of overdue records
    pub overdue_count: usize,
}

impl DashboardSummary {
    /// Generate the summary as of `today`
    ///
    /// Inactive bills contribute to nothing. Paid records still count toward
    /// the monthly totals; only the overdue figures look at status.
    pub fn generate(
        expenses: &[ExpenseRecord],
        fixed: &[FixedExpenseRecord],
        today: NaiveDate,
    ) -> Self {
        let current = Month::of(today);

        let active_fixed: Vec<&FixedExpenseRecord> =
            fixed.iter().filter(|b| b.active).collect();

        // Current month, grouped by method
        let mut by_method: Vec<(PaymentMethod, Money)> = Vec::new();
        let mut current_month_total = Money::zero();
        let mut current_month_card_total = Money::zero();

        let mut add_to_month = |method: PaymentMethod, amount: Money| {
            match by_method.iter_mut().find(|(m, _)| *m == method) {
                Some((_, total)) => *total += amount,
                None => by_method.push((method, amount)),
            }
            current_month_total += amount;
            if method.is_card() {
                current_month_card_total += amount;
            }
        };

        for expense in expenses {
            if current.contains(expense.due_date) {
                add_to_month(expense.method, expense.amount);
            }
        }
        for bill in &active_fixed {
            if current.contains(bill.next_due_date(today)) {
                add_to_month(bill.method, bill.amount);
            }
        }

        by_method.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.label().cmp(b.0.label())));

        // Trailing six months, oldest first
        let mut trailing: Vec<(Month, Money)> = (0..TRAILING_MONTHS)
            .rev()
            .map(|i| (current.minus_months(i as u32), Money::zero()))
            .collect();

        for expense in expenses {
            let month = Month::of(expense.due_date);
            if let Some((_, total)) = trailing.iter_mut().find(|(m, _)| *m == month) {
                *total += expense.amount;
            }
        }
        for bill in &active_fixed {
            let month = Month::of(bill.next_due_date(today));
            if let Some((_, total)) = trailing.iter_mut().find(|(m, _)| *m == month) {
                *total += bill.amount;
            }
        }

        // Trailing average: bills recur monthly, so each month carries the
        // full active-bill total regardless of occurrence dates
        let fixed_monthly: Money = active_fixed
            .iter()
            .fold(Money::zero(), |acc, b| acc + b.amount);

        let mut average_sum = Money::zero();
        for i in 0..AVERAGE_MONTHS {
            let month = current.minus_months(i as u32);
            for expense in expenses {
                if month.contains(expense.due_date) {
                    average_sum += expense.amount;
                }
            }
            average_sum += fixed_monthly;
        }
        let trailing_three_month_average =
            Money::from_cents(average_sum.cents() / AVERAGE_MONTHS as i64);

        // Overdue backlog, both kinds through the one classifier
        let mut overdue_total = Money::zero();
        let mut overdue_count = 0;

        for expense in expenses {
            if DerivedStatus::of_expense(expense, today) == DerivedStatus::Overdue {
                overdue_total += expense.amount;
                overdue_count += 1;
            }
        }
        for bill in &active_fixed {
            if DerivedStatus::of_fixed(bill, today) == DerivedStatus::Overdue {
                overdue_total += bill.amount;
                overdue_count += 1;
            }
        }

        Self {
            month: current,
            current_month_by_method: by_method,
            current_month_total,
            current_month_card_total,
            trailing_six_month_totals: trailing,
            trailing_three_month_average,
            overdue_total,
            overdue_count,
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Dashboard: {}\n", self.month));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str("\nCurrent month by payment method\n");
        if self.current_month_by_method.is_empty() {
            output.push_str("  (nothing due this month)\n");
        } else {
            for (method, total) in &self.current_month_by_method {
                output.push_str(&format!(
                    "  {:<25} {:>14}\n",
                    method.label(),
                    total.format_with_symbol(currency_symbol)
                ));
            }
        }
        output.push_str(&format!(
            "  {:<25} {:>14}\n",
            "Total",
            self.current_month_total.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "  {:<25} {:>14}\n",
            "Card total",
            self.current_month_card_total
                .format_with_symbol(currency_symbol)
        ));

        output.push_str("\nLast six months\n");
        for (month, total) in &self.trailing_six_month_totals {
            output.push_str(&format!(
                "  {:<25} {:>14}\n",
                month.to_string(),
                total.format_with_symbol(currency_symbol)
            ));
        }

        output.push_str(&format!(
            "\nThree-month average: {}\n",
            self.trailing_three_month_average
                .format_with_symbol(currency_symbol)
        ));

        output.push_str(&format!(
            "Overdue: {} ({} record{})\n",
            self.overdue_total.format_with_symbol(currency_symbol),
            self.overdue_count,
            if self.overdue_count == 1 { "" } else { "s" }
        ));

        output
    }
}
