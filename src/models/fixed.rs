//! Fixed expense model
//!
//! A fixed expense is a bill that recurs every calendar month on a fixed day.
//! Only the day-of-month is stored; the next occurrence date is derived
//! against "today" on every read. Payment is tracked per cycle through
//! `paid_through`: the bill reads as paid only while the month of its next
//! occurrence is covered, so a new cycle reverts it automatically.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{FixedExpenseId, OwnerId};
use super::method::PaymentMethod;
use super::money::Money;
use super::period::Month;

/// A monthly recurring bill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedExpenseRecord {
    /// Unique identifier
    pub id: FixedExpenseId,

    /// The user this record belongs to
    pub owner_id: OwnerId,

    /// Free-text description
    pub description: String,

    /// Amount owed each cycle, always positive
    pub amount: Money,

    /// How it is paid
    #[serde(default)]
    pub method: PaymentMethod,

    /// Day of the month the bill falls due (1-31, clamped in short months)
    pub due_day: u32,

    /// Optional free-text category
    #[serde(default)]
    pub category: Option<String>,

    /// Inactive bills stay listed but are excluded from status and summaries
    #[serde(default = "default_active")]
    pub active: bool,

    /// Most recent cycle the user has settled
    #[serde(default)]
    pub paid_through: Option<Month>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl FixedExpenseRecord {
    /// Create a new active bill
    pub fn new(
        owner_id: OwnerId,
        description: impl Into<String>,
        amount: Money,
        method: PaymentMethod,
        due_day: u32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: FixedExpenseId::new(),
            owner_id,
            description: description.into(),
            amount,
            method,
            due_day,
            category: None,
            active: true,
            paid_through: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The next date this bill falls due, as of `today`
    ///
    /// The occurrence in `today`'s month if it has not passed yet, otherwise
    /// the occurrence next month. The day clamps in months shorter than
    /// `due_day`.
    pub fn next_due_date(&self, today: NaiveDate) -> NaiveDate {
        let this_month = Month::of(today).date_on_day(self.due_day);
        if this_month < today {
            Month::of(today).next().date_on_day(self.due_day)
        } else {
            this_month
        }
    }

    /// The cycle the next occurrence falls in
    pub fn cycle(&self, today: NaiveDate) -> Month {
        Month::of(self.next_due_date(today))
    }

    /// Whether the given cycle has been settled
    pub fn is_paid_for(&self, cycle: Month) -> bool {
        self.paid_through.map_or(false, |paid| paid >= cycle)
    }

    /// Settle a cycle; never moves the marker backwards
    pub fn mark_paid_for(&mut self, cycle: Month) {
        self.paid_through = Some(match self.paid_through {
            Some(current) if current > cycle => current,
            _ => cycle,
        });
        self.updated_at = Utc::now();
    }

    /// Remove the settled marker entirely
    pub fn clear_paid(&mut self) {
        self.paid_through = None;
        self.updated_at = Utc::now();
    }

    /// Flip the active flag
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.updated_at = Utc::now();
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), FixedExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(FixedExpenseValidationError::EmptyDescription);
        }

        if !self.amount.is_positive() {
            return Err(FixedExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if !(1..=31).contains(&self.due_day) {
            return Err(FixedExpenseValidationError::DueDayOutOfRange(self.due_day));
        }

        Ok(())
    }
}

impl fmt::Display for FixedExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dia {} {} {}",
            self.due_day, self.description, self.amount
        )
    }
}

/// Validation errors for fixed expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixedExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
    DueDayOutOfRange(u32),
}

impl fmt::Display for FixedExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "description must not be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "amount must be positive, got {}", amount)
            }
            Self::DueDayOutOfRange(day) => {
                write!(f, "due day must be between 1 and 31, got {}", day)
            }
        }
    }
}

impl std::error::Error for FixedExpenseValidationError {}
