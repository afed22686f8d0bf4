//! Core data models for gastos-cli
//!
//! This module contains the data structures of the expense domain: money,
//! calendar months, payment methods, variable expenses, and fixed bills.

pub mod expense;
pub mod fixed;
pub mod ids;
pub mod method;
pub mod money;
pub mod period;

pub use expense::{ExpenseRecord, ExpenseValidationError};
pub use fixed::{FixedExpenseRecord, FixedExpenseValidationError};
pub use ids::{ExpenseId, FixedExpenseId, OwnerId};
pub use method::PaymentMethod;
pub use money::Money;
pub use period::{add_months, days_in_month, Month};
