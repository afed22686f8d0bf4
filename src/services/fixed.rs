//! Fixed expense service
//!
//! Business logic for recurring bills: creation, edits, activation, and the
//! per-cycle payment marker. A bill is one record; its occurrences are
//! derived, never materialized.

use chrono::{NaiveDate, Utc};

use crate::audit::EntityType;
use crate::error::{GastosError, GastosResult};
use crate::models::{FixedExpenseId, FixedExpenseRecord, Money, OwnerId, PaymentMethod};
use crate::storage::Storage;

/// Service for fixed expense management
pub struct FixedExpenseService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new fixed expense
#[derive(Debug, Clone)]
pub struct CreateFixedExpenseInput {
    pub owner_id: OwnerId,
    pub description: String,
    pub amount: Money,
    pub method: PaymentMethod,
    pub due_day: u32,
    pub category: Option<String>,
}

impl<'a> FixedExpenseService<'a> {
    /// Create a new fixed expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new fixed expense
    pub fn create(&self, input: CreateFixedExpenseInput) -> GastosResult<FixedExpenseRecord> {
        let mut bill = FixedExpenseRecord::new(
            input.owner_id,
            input.description.trim(),
            input.amount,
            input.method,
            input.due_day,
        );
        bill.category = input.category;

        bill.validate()
            .map_err(|e| GastosError::Validation(e.to_string()))?;

        self.storage.fixed.upsert(bill.clone())?;
        self.storage.fixed.save()?;

        self.storage.log_create(
            EntityType::FixedExpense,
            bill.id.to_string(),
            Some(bill.description.clone()),
        )?;

        Ok(bill)
    }

    /// Get a fixed expense owned by the caller
    ///
    /// Someone else's bill reports the same lookup failure as a missing one.
    pub fn get(&self, owner_id: OwnerId, id: FixedExpenseId) -> GastosResult<FixedExpenseRecord> {
        self.storage
            .fixed
            .get(id)?
            .filter(|b| b.owner_id == owner_id)
            .ok_or_else(|| GastosError::fixed_expense_not_found(id.to_string()))
    }

    /// Find a fixed expense by ID, full UUID or the short form listings print
    pub fn find(&self, owner_id: OwnerId, identifier: &str) -> GastosResult<FixedExpenseRecord> {
        if let Ok(id) = identifier.parse::<FixedExpenseId>() {
            return self.get(owner_id, id);
        }

        self.list(owner_id)?
            .into_iter()
            .find(|b| b.id.to_string() == identifier)
            .ok_or_else(|| GastosError::fixed_expense_not_found(identifier.to_string()))
    }

    /// List the caller's fixed expenses, ordered by due day
    pub fn list(&self, owner_id: OwnerId) -> GastosResult<Vec<FixedExpenseRecord>> {
        self.storage.fixed.get_by_owner(owner_id)
    }

    /// List only the caller's active fixed expenses
    pub fn list_active(&self, owner_id: OwnerId) -> GastosResult<Vec<FixedExpenseRecord>> {
        Ok(self
            .list(owner_id)?
            .into_iter()
            .filter(|b| b.active)
            .collect())
    }

    /// Update a fixed expense
    pub fn update(
        &self,
        owner_id: OwnerId,
        id: FixedExpenseId,
        description: Option<String>,
        amount: Option<Money>,
        method: Option<PaymentMethod>,
        due_day: Option<u32>,
        category: Option<Option<String>>,
    ) -> GastosResult<FixedExpenseRecord> {
        let mut bill = self.get(owner_id, id)?;
        let before = bill.clone();

        if let Some(new_description) = description {
            bill.description = new_description.trim().to_string();
        }
        if let Some(new_amount) = amount {
            bill.amount = new_amount;
        }
        if let Some(new_method) = method {
            bill.method = new_method;
        }
        if let Some(new_due_day) = due_day {
            bill.due_day = new_due_day;
        }
        // category: None = no change, Some(None) = clear, Some(Some(c)) = set
        if let Some(new_category) = category {
            bill.category = new_category;
        }
        bill.updated_at = Utc::now();

        bill.validate()
            .map_err(|e| GastosError::Validation(e.to_string()))?;

        self.storage.fixed.upsert(bill.clone())?;
        self.storage.fixed.save()?;

        let mut changes = Vec::new();
        if before.description != bill.description {
            changes.push(format!(
                "description: '{}' -> '{}'",
                before.description, bill.description
            ));
        }
        if before.amount != bill.amount {
            changes.push(format!("amount: {} -> {}", before.amount, bill.amount));
        }
        if before.method != bill.method {
            changes.push(format!("method: {} -> {}", before.method, bill.method));
        }
        if before.due_day != bill.due_day {
            changes.push(format!("due day: {} -> {}", before.due_day, bill.due_day));
        }
        if before.category != bill.category {
            changes.push(format!(
                "category: {:?} -> {:?}",
                before.category, bill.category
            ));
        }

        let detail = if changes.is_empty() {
            None
        } else {
            Some(changes.join(", "))
        };

        self.storage.log_update(
            EntityType::FixedExpense,
            bill.id.to_string(),
            Some(bill.description.clone()),
            detail,
        )?;

        Ok(bill)
    }

    /// Settle the bill's current cycle
    ///
    /// Marks the cycle of the next occurrence as paid; when that cycle ends
    /// the bill reverts to date-derived status on its own.
    pub fn mark_paid(
        &self,
        owner_id: OwnerId,
        id: FixedExpenseId,
        today: NaiveDate,
    ) -> GastosResult<FixedExpenseRecord> {
        let mut bill = self.get(owner_id, id)?;

        let cycle = bill.cycle(today);
        bill.mark_paid_for(cycle);

        self.storage.fixed.upsert(bill.clone())?;
        self.storage.fixed.save()?;

        self.storage.log_update(
            EntityType::FixedExpense,
            bill.id.to_string(),
            Some(bill.description.clone()),
            Some(format!("paid through: {}", cycle)),
        )?;

        Ok(bill)
    }

    /// Remove the bill's settled marker entirely
    pub fn clear_paid(&self, owner_id: OwnerId, id: FixedExpenseId) -> GastosResult<FixedExpenseRecord> {
        let mut bill = self.get(owner_id, id)?;

        if bill.paid_through.is_none() {
            return Ok(bill);
        }

        bill.clear_paid();

        self.storage.fixed.upsert(bill.clone())?;
        self.storage.fixed.save()?;

        self.storage.log_update(
            EntityType::FixedExpense,
            bill.id.to_string(),
            Some(bill.description.clone()),
            Some("paid marker cleared".to_string()),
        )?;

        Ok(bill)
    }

    /// Activate or deactivate a bill
    ///
    /// Inactive bills stay listed but leave every aggregate.
    pub fn set_active(
        &self,
        owner_id: OwnerId,
        id: FixedExpenseId,
        active: bool,
    ) -> GastosResult<FixedExpenseRecord> {
        let mut bill = self.get(owner_id, id)?;

        if bill.active == active {
            return Ok(bill);
        }

        bill.set_active(active);

        self.storage.fixed.upsert(bill.clone())?;
        self.storage.fixed.save()?;

        self.storage.log_update(
            EntityType::FixedExpense,
            bill.id.to_string(),
            Some(bill.description.clone()),
            Some(format!("active: {} -> {}", !active, active)),
        )?;

        Ok(bill)
    }

    /// Delete a fixed expense
    pub fn delete(&self, owner_id: OwnerId, id: FixedExpenseId) -> GastosResult<FixedExpenseRecord> {
        let bill = self.get(owner_id, id)?;

        self.storage.fixed.delete(id)?;
        self.storage.fixed.save()?;

        self.storage.log_delete(
            EntityType::FixedExpense,
            id.to_string(),
            Some(bill.description.clone()),
        )?;

        Ok(bill)
    }

    /// Count the caller's fixed expenses
    pub fn count(&self, owner_id: OwnerId) -> GastosResult<usize> {
        Ok(self.list(owner_id)?.len())
    }
}
