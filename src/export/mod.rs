//! Export module for gastos-cli
//!
//! Provides data export functionality:
//! - CSV: expense and fixed-bill tables (spreadsheet-compatible)

pub mod csv;

pub use csv::{export_expenses_csv, export_fixed_csv};
