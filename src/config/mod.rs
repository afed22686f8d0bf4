//! Configuration module
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - The local owner identity

pub mod paths;
pub mod settings;

pub use paths::GastosPaths;
pub use settings::Settings;
