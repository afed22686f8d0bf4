//! Expense repository for JSON storage
//!
//! Manages loading and saving variable expenses to expenses.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::GastosError;
use crate::models::{ExpenseId, ExpenseRecord, OwnerId};

use super::json_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<ExpenseRecord>,
}

/// Repository for expense persistence with an owner index
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, ExpenseRecord>>,
    /// Index: owner_id -> expense_ids
    by_owner: RwLock<HashMap<OwnerId, Vec<ExpenseId>>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_owner: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk and build the owner index
    pub fn load(&self) -> Result<(), GastosError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_owner = self
            .by_owner
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_owner.clear();

        for expense in file_data.expenses {
            by_owner.entry(expense.owner_id).or_default().push(expense.id);
            data.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then(a.installment_index.cmp(&b.installment_index))
        });

        let file_data = ExpenseData { expenses };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<ExpenseRecord>, GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all expenses, in creation order
    pub fn get_all(&self) -> Result<Vec<ExpenseRecord>, GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        // Creation order; downstream stable sorts depend on it
        expenses.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then(a.installment_index.cmp(&b.installment_index))
        });
        Ok(expenses)
    }

    /// Get the expenses belonging to an owner, in creation order
    pub fn get_by_owner(&self, owner_id: OwnerId) -> Result<Vec<ExpenseRecord>, GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_owner = self
            .by_owner
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let ids = by_owner.get(&owner_id).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut expenses: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        expenses.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then(a.installment_index.cmp(&b.installment_index))
        });
        Ok(expenses)
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: ExpenseRecord) -> Result<(), GastosError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_owner = self
            .by_owner
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(old) = data.get(&expense.id) {
            if let Some(ids) = by_owner.get_mut(&old.owner_id) {
                ids.retain(|&id| id != expense.id);
            }
        }

        by_owner.entry(expense.owner_id).or_default().push(expense.id);
        data.insert(expense.id, expense);
        Ok(())
    }

    /// Insert a whole batch under one lock acquisition
    ///
    /// Used by installment expansion so one purchase lands as a unit.
    pub fn upsert_batch(&self, expenses: Vec<ExpenseRecord>) -> Result<(), GastosError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_owner = self
            .by_owner
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        for expense in expenses {
            if let Some(old) = data.get(&expense.id) {
                if let Some(ids) = by_owner.get_mut(&old.owner_id) {
                    ids.retain(|&id| id != expense.id);
                }
            }
            by_owner.entry(expense.owner_id).or_default().push(expense.id);
            data.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> Result<bool, GastosError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_owner = self
            .by_owner
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(expense) = data.remove(&id) {
            if let Some(ids) = by_owner.get_mut(&expense.owner_id) {
                ids.retain(|&eid| eid != id);
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
