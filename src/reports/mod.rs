//! Reports module for gastos-cli
//!
//! Derived summaries over the expense collections. Reports are recomputed
//! from the records on every call and never persisted.

pub mod dashboard;

pub use dashboard::{DashboardSummary, AVERAGE_MONTHS, TRAILING_MONTHS};
