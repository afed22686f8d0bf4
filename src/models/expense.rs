//! Variable expense model
//!
//! A variable expense is one dated amount owed, either a standalone purchase
//! or one installment of a larger one. Records store the explicit `paid`
//! flag; every other status is derived at read time and never persisted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ExpenseId, OwnerId};
use super::method::PaymentMethod;
use super::money::Money;

/// A variable expense or a single installment of one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier
    pub id: ExpenseId,

    /// The user this record belongs to; every read and write is scoped to it
    pub owner_id: OwnerId,

    /// Free-text description; installments carry a " - Parcela i/n" suffix
    pub description: String,

    /// Amount owed, always positive
    pub amount: Money,

    /// How it is paid
    #[serde(default)]
    pub method: PaymentMethod,

    /// The calendar date the amount is owed
    pub due_date: NaiveDate,

    /// 1-based position within the purchase (1 for standalone expenses)
    pub installment_index: u32,

    /// Total number of installments in the purchase (1 for standalone)
    pub installment_count: u32,

    /// Optional free-text category
    #[serde(default)]
    pub category: Option<String>,

    /// Explicitly set by the user; overrides every date-derived status
    #[serde(default)]
    pub paid: bool,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl ExpenseRecord {
    /// Create a standalone expense (a single installment of itself)
    pub fn new(
        owner_id: OwnerId,
        description: impl Into<String>,
        amount: Money,
        method: PaymentMethod,
        due_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            owner_id,
            description: description.into(),
            amount,
            method,
            due_date,
            installment_index: 1,
            installment_count: 1,
            category: None,
            paid: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this record is part of a multi-installment purchase
    pub fn is_installment(&self) -> bool {
        self.installment_count > 1
    }

    /// "i/n" position label for installments, None for standalone expenses
    pub fn installment_label(&self) -> Option<String> {
        if self.is_installment() {
            Some(format!(
                "{}/{}",
                self.installment_index, self.installment_count
            ))
        } else {
            None
        }
    }

    /// Set the paid flag
    pub fn set_paid(&mut self, paid: bool) {
        self.paid = paid;
        self.updated_at = Utc::now();
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.installment_count == 0
            || self.installment_index == 0
            || self.installment_index > self.installment_count
        {
            return Err(ExpenseValidationError::InstallmentOutOfRange {
                index: self.installment_index,
                count: self.installment_count,
            });
        }

        Ok(())
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.due_date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
    InstallmentOutOfRange { index: u32, count: u32 },
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "description must not be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "amount must be positive, got {}", amount)
            }
            Self::InstallmentOutOfRange { index, count } => write!(
                f,
                "installment index {} out of range for count {}",
                index, count
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
