//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod dashboard;
pub mod expense;
pub mod export;
pub mod fixed;
pub mod history;

pub use dashboard::handle_dashboard_command;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use fixed::{handle_fixed_command, FixedCommands};
pub use history::handle_history_command;
