//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables and status labels.

pub mod expense;
pub mod fixed;

pub use expense::{format_expense_details, format_expense_list, format_expense_row};
pub use fixed::{format_fixed_details, format_fixed_list, format_fixed_row};
