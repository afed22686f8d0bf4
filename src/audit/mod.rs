//! Audit logging
//!
//! Records every create, update, and delete in an append-only log so a user
//! can answer "what happened to my data" after the fact.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single log entry with timestamp, operation, entity
//!   information, and an optional change summary.
//! - `AuditLogger`: writes entries to the log file using a line-delimited
//!   JSON format (JSONL).
//!
//! Mutating services append through the `Storage` helpers rather than
//! holding a logger themselves.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
