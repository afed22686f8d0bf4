//! Storage layer
//!
//! JSON file storage with atomic writes and automatic directory creation.
//! One repository per record kind, coordinated behind a single `Storage`
//! value that also owns the audit log.

pub mod expenses;
pub mod fixed;
pub mod json_io;

pub use expenses::ExpenseRepository;
pub use fixed::FixedExpenseRepository;
pub use json_io::{read_json, write_json_atomic};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::GastosPaths;
use crate::error::GastosError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: GastosPaths,
    pub expenses: ExpenseRepository,
    pub fixed: FixedExpenseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: GastosPaths) -> Result<Self, GastosError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            fixed: FixedExpenseRepository::new(paths.fixed_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &GastosPaths {
        &self.paths
    }

    /// Get the audit log reader
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), GastosError> {
        self.expenses.load()?;
        self.fixed.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), GastosError> {
        self.expenses.save()?;
        self.fixed.save()?;
        Ok(())
    }

    /// Check if storage has been initialized (has a settings file)
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }

    /// Record a create in the audit log
    pub fn log_create(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
    ) -> Result<(), GastosError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name))
    }

    /// Record an update in the audit log
    pub fn log_update(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        detail: Option<String>,
    ) -> Result<(), GastosError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            detail,
        ))
    }

    /// Record a delete in the audit log
    pub fn log_delete(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
    ) -> Result<(), GastosError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name))
    }

    /// Record a batch of audit entries in one append
    pub fn log_batch(&self, entries: &[AuditEntry]) -> Result<(), GastosError> {
        self.audit.log_batch(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, FixedExpenseRecord, Money, OwnerId, PaymentMethod};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_load_save_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());

        let owner = OwnerId::new();
        {
            let mut storage = Storage::new(paths.clone()).unwrap();
            storage.load_all().unwrap();

            storage
                .expenses
                .upsert(ExpenseRecord::new(
                    owner,
                    "Mercado",
                    Money::from_cents(12_050),
                    PaymentMethod::Pix,
                    NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
                ))
                .unwrap();
            storage
                .fixed
                .upsert(FixedExpenseRecord::new(
                    owner,
                    "Aluguel",
                    Money::from_cents(120_000),
                    PaymentMethod::BankSlip,
                    5,
                ))
                .unwrap();
            storage.save_all().unwrap();
        }

        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        assert_eq!(storage.expenses.count().unwrap(), 1);
        assert_eq!(storage.fixed.count().unwrap(), 1);
        assert_eq!(storage.expenses.get_by_owner(owner).unwrap().len(), 1);
    }

    #[test]
    fn test_audit_helpers_append() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage
            .log_create(
                EntityType::Expense,
                "exp-123".to_string(),
                Some("Mercado".to_string()),
            )
            .unwrap();
        storage
            .log_update(
                EntityType::FixedExpense,
                "fix-456".to_string(),
                None,
                Some("amount changed".to_string()),
            )
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
    }
}
