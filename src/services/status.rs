//! Derived payment status
//!
//! One rule, one place. Every list, filter, sort, export, and summary goes
//! through `classify_due`; nothing else in the crate compares a due date to
//! today. The status is computed on every read and never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{ExpenseRecord, FixedExpenseRecord, Month};

/// A record due within this many days of today counts as due soon
pub const DUE_SOON_WINDOW_DAYS: i64 = 10;

/// Read-time payment classification
///
/// Declaration order is display priority: overdue sorts before due-soon,
/// due-soon before upcoming, and paid records sink to the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedStatus {
    Overdue,
    DueSoon,
    Upcoming,
    Paid,
}

impl DerivedStatus {
    /// Classify a variable expense as of `today`
    pub fn of_expense(record: &ExpenseRecord, today: NaiveDate) -> Self {
        classify_due(record.due_date, record.paid, today)
    }

    /// Classify a fixed bill as of `today`
    ///
    /// The date compared is the bill's next occurrence, and the paid flag is
    /// whether that occurrence's cycle has been settled. Callers exclude
    /// inactive bills before classifying.
    pub fn of_fixed(record: &FixedExpenseRecord, today: NaiveDate) -> Self {
        let due = record.next_due_date(today);
        classify_due(due, record.is_paid_for(Month::of(due)), today)
    }

    /// Sort rank; lower displays earlier
    pub fn priority(&self) -> u8 {
        match self {
            Self::Overdue => 0,
            Self::DueSoon => 1,
            Self::Upcoming => 2,
            Self::Paid => 3,
        }
    }

    /// Parse a status filter argument
    ///
    /// Accepts the canonical names and the labels the original tracker used
    /// ("pago", "vencido", "a_vencer").
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "overdue" | "vencido" => Some(Self::Overdue),
            "due-soon" | "duesoon" | "due_soon" | "a_vencer" | "a-vencer" => Some(Self::DueSoon),
            "upcoming" | "futuro" => Some(Self::Upcoming),
            "paid" | "pago" => Some(Self::Paid),
            _ => None,
        }
    }
}

impl fmt::Display for DerivedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overdue => write!(f, "Overdue"),
            Self::DueSoon => write!(f, "Due soon"),
            Self::Upcoming => write!(f, "Upcoming"),
            Self::Paid => write!(f, "Paid"),
        }
    }
}

/// The single status rule
///
/// `paid` wins unconditionally. Otherwise the whole-day distance from today
/// to the due date decides: negative is overdue, within the window is due
/// soon, beyond it is upcoming. Both dates are calendar days; time of day
/// never enters.
pub fn classify_due(due_date: NaiveDate, paid: bool, today: NaiveDate) -> DerivedStatus {
    if paid {
        return DerivedStatus::Paid;
    }

    let days_until_due = (due_date - today).num_days();
    if days_until_due < 0 {
        DerivedStatus::Overdue
    } else if days_until_due <= DUE_SOON_WINDOW_DAYS {
        DerivedStatus::DueSoon
    } else {
        DerivedStatus::Upcoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, OwnerId, PaymentMethod};
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_paid_overrides_everything() {
        let today = date(2025, 6, 15);
        assert_eq!(
            classify_due(today - Duration::days(100), true, today),
            DerivedStatus::Paid
        );
        assert_eq!(
            classify_due(today + Duration::days(100), true, today),
            DerivedStatus::Paid
        );
    }

    #[test]
    fn test_window_boundaries() {
        let today = date(2025, 6, 15);

        assert_eq!(classify_due(today, false, today), DerivedStatus::DueSoon);
        assert_eq!(
            classify_due(today - Duration::days(1), false, today),
            DerivedStatus::Overdue
        );
        assert_eq!(
            classify_due(today + Duration::days(10), false, today),
            DerivedStatus::DueSoon
        );
        assert_eq!(
            classify_due(today + Duration::days(11), false, today),
            DerivedStatus::Upcoming
        );
    }

    #[test]
    fn test_typical_distances() {
        let today = date(2025, 6, 15);

        assert_eq!(
            classify_due(today - Duration::days(5), false, today),
            DerivedStatus::Overdue
        );
        assert_eq!(
            classify_due(today + Duration::days(3), false, today),
            DerivedStatus::DueSoon
        );
        assert_eq!(
            classify_due(today + Duration::days(30), false, today),
            DerivedStatus::Upcoming
        );
        assert_eq!(
            classify_due(today - Duration::days(5), true, today),
            DerivedStatus::Paid
        );
    }

    #[test]
    fn test_classify_is_deterministic() {
        let today = date(2025, 6, 15);
        let due = date(2025, 6, 20);
        let first = classify_due(due, false, today);
        for _ in 0..10 {
            assert_eq!(classify_due(due, false, today), first);
        }
    }

    #[test]
    fn test_of_expense_uses_paid_flag() {
        let today = date(2025, 6, 15);
        let mut exp = ExpenseRecord::new(
            OwnerId::new(),
            "Sofá",
            Money::from_cents(10_000),
            PaymentMethod::CreditCard,
            date(2025, 6, 10),
        );

        assert_eq!(
            DerivedStatus::of_expense(&exp, today),
            DerivedStatus::Overdue
        );

        exp.set_paid(true);
        assert_eq!(DerivedStatus::of_expense(&exp, today), DerivedStatus::Paid);
    }

    #[test]
    fn test_of_fixed_advances_past_occurrences() {
        let today = date(2025, 6, 20);
        let bill = FixedExpenseRecord::new(
            OwnerId::new(),
            "Aluguel",
            Money::from_cents(120_000),
            PaymentMethod::BankSlip,
            10,
        );

        // June 10 has passed, so the comparison runs against July 10
        assert_eq!(DerivedStatus::of_fixed(&bill, today), DerivedStatus::Upcoming);

        // Within the window of July 10
        assert_eq!(
            DerivedStatus::of_fixed(&bill, date(2025, 6, 30)),
            DerivedStatus::DueSoon
        );

        // A fixed bill never classifies overdue: its occurrence rolls forward
        assert_eq!(
            DerivedStatus::of_fixed(&bill, date(2025, 6, 11)),
            DerivedStatus::Upcoming
        );
    }

    #[test]
    fn test_of_fixed_paid_cycle_reverts_next_month() {
        let mut bill = FixedExpenseRecord::new(
            OwnerId::new(),
            "Academia",
            Money::from_cents(8_000),
            PaymentMethod::Debit,
            10,
        );

        let before_due = date(2025, 6, 5);
        bill.mark_paid_for(bill.cycle(before_due));
        assert_eq!(
            DerivedStatus::of_fixed(&bill, before_due),
            DerivedStatus::Paid
        );

        // Once the next cycle starts, the settled marker no longer covers it
        let next_cycle = date(2025, 7, 1);
        assert_eq!(
            DerivedStatus::of_fixed(&bill, next_cycle),
            DerivedStatus::DueSoon
        );
    }

    #[test]
    fn test_status_ordering_matches_priority() {
        assert!(DerivedStatus::Overdue < DerivedStatus::DueSoon);
        assert!(DerivedStatus::DueSoon < DerivedStatus::Upcoming);
        assert!(DerivedStatus::Upcoming < DerivedStatus::Paid);
        assert_eq!(DerivedStatus::Overdue.priority(), 0);
        assert_eq!(DerivedStatus::Paid.priority(), 3);
    }

    #[test]
    fn test_parse_accepts_both_vocabularies() {
        assert_eq!(DerivedStatus::parse("overdue"), Some(DerivedStatus::Overdue));
        assert_eq!(DerivedStatus::parse("vencido"), Some(DerivedStatus::Overdue));
        assert_eq!(DerivedStatus::parse("Pago"), Some(DerivedStatus::Paid));
        assert_eq!(DerivedStatus::parse("due-soon"), Some(DerivedStatus::DueSoon));
        assert_eq!(DerivedStatus::parse("a_vencer"), Some(DerivedStatus::DueSoon));
        assert_eq!(DerivedStatus::parse("upcoming"), Some(DerivedStatus::Upcoming));
        assert_eq!(DerivedStatus::parse("nonsense"), None);
    }
}
