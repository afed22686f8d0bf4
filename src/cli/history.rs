//! History CLI command
//!
//! Shows the most recent entries from the audit log.

use crate::error::GastosResult;
use crate::storage::Storage;

/// Handle the history command
pub fn handle_history_command(storage: &Storage, limit: usize) -> GastosResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    println!("\nShowing {} of {} entries", entries.len(), storage.audit().entry_count()?);

    Ok(())
}
