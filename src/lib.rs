//! gastos-cli - Terminal-based expense tracker
//!
//! This library provides the core functionality for the gastos-cli expense
//! tracker. It manages variable expenses (optionally split into monthly
//! installments) and recurring fixed bills, deriving overdue/due-soon status
//! from the calendar on every read instead of persisting it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, fixed bills, money, months)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (expansion, classification, filtering)
//! - `reports`: Derived summaries for the dashboard
//! - `audit`: Audit logging system
//! - `clock`: Injected "today" so nothing reads the system clock directly
//!
//! # Example
//!
//! ```rust,ignore
//! use gastos::config::{paths::GastosPaths, settings::Settings};
//!
//! let paths = GastosPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::GastosError;
