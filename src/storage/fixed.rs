//! Fixed expense repository for JSON storage
//!
//! Manages loading and saving recurring bills to fixed.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::GastosError;
use crate::models::{FixedExpenseId, FixedExpenseRecord, OwnerId};

use super::json_io::{read_json, write_json_atomic};

/// Serializable fixed expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct FixedExpenseData {
    fixed_expenses: Vec<FixedExpenseRecord>,
}

/// Repository for fixed expense persistence with an owner index
pub struct FixedExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<FixedExpenseId, FixedExpenseRecord>>,
    /// Index: owner_id -> fixed_expense_ids
    by_owner: RwLock<HashMap<OwnerId, Vec<FixedExpenseId>>>,
}

impl FixedExpenseRepository {
    /// Create a new fixed expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_owner: RwLock::new(HashMap::new()),
        }
    }

    /// Load fixed expenses from disk and build the owner index
    pub fn load(&self) -> Result<(), GastosError> {
        let file_data: FixedExpenseData = read_json(&self.path)?;

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

        for bill in file_data.fixed_expenses {
            by_owner.entry(bill.owner_id).or_default().push(bill.id);
            data.insert(bill.id, bill);
        }

        Ok(())
    }

    /// Save fixed expenses to disk
    pub fn save(&self) -> Result<(), GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut fixed_expenses: Vec<_> = data.values().cloned().collect();
        fixed_expenses.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let file_data = FixedExpenseData { fixed_expenses };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a fixed expense by ID
    pub fn get(&self, id: FixedExpenseId) -> Result<Option<FixedExpenseRecord>, GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all fixed expenses, in creation order
    pub fn get_all(&self) -> Result<Vec<FixedExpenseRecord>, GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut bills: Vec<_> = data.values().cloned().collect();
        bills.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(bills)
    }

    /// Get the fixed expenses belonging to an owner, ordered by due day
    pub fn get_by_owner(&self, owner_id: OwnerId) -> Result<Vec<FixedExpenseRecord>, GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_owner = self
            .by_owner
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let ids = by_owner.get(&owner_id).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut bills: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        bills.sort_by(|a, b| {
            a.due_day
                .cmp(&b.due_day)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(bills)
    }

    /// Insert or update a fixed expense
    pub fn upsert(&self, bill: FixedExpenseRecord) -> Result<(), GastosError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_owner = self
            .by_owner
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(old) = data.get(&bill.id) {
            if let Some(ids) = by_owner.get_mut(&old.owner_id) {
                ids.retain(|&id| id != bill.id);
            }
        }

        by_owner.entry(bill.owner_id).or_default().push(bill.id);
        data.insert(bill.id, bill);
        Ok(())
    }

    /// Delete a fixed expense
    pub fn delete(&self, id: FixedExpenseId) -> Result<bool, GastosError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_owner = self
            .by_owner
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(bill) = data.remove(&id) {
            if let Some(ids) = by_owner.get_mut(&bill.owner_id) {
                ids.retain(|&bid| bid != id);
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Count fixed expenses
    pub fn count(&self) -> Result<usize, GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
