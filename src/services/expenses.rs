//! Expense service
//!
//! Business logic for variable expenses: installment creation, owner-scoped
//! lookup, edits, paid toggles, and deletion. Reads that feed screens go
//! through `view` so filtering and ordering stay in one place.

use chrono::{NaiveDate, Utc};

use crate::audit::{AuditEntry, EntityType};
use crate::error::{GastosError, GastosResult};
use crate::models::{ExpenseId, ExpenseRecord, Money, OwnerId, PaymentMethod};
use crate::services::installments::{expand, InstallmentPlan};
use crate::services::view::{view, ExpenseFilter, ExpenseView};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create the expense records for a purchase
    ///
    /// Expands the plan into installment drafts and persists them as one
    /// batch; a validation failure stores nothing.
    pub fn create(&self, plan: InstallmentPlan) -> GastosResult<Vec<ExpenseRecord>> {
        let drafts = expand(plan)?;

        self.storage.expenses.upsert_batch(drafts.clone())?;
        self.storage.expenses.save()?;

        let entries: Vec<AuditEntry> = drafts
            .iter()
            .map(|d| {
                AuditEntry::create(
                    EntityType::Expense,
                    d.id.to_string(),
                    Some(d.description.clone()),
                )
            })
            .collect();
        self.storage.log_batch(&entries)?;

        Ok(drafts)
    }

    /// Get an expense owned by the caller
    ///
    /// A record that exists but belongs to someone else reports the same
    /// lookup failure as one that doesn't exist.
    pub fn get(&self, owner_id: OwnerId, id: ExpenseId) -> GastosResult<ExpenseRecord> {
        self.storage
            .expenses
            .get(id)?
            .filter(|e| e.owner_id == owner_id)
            .ok_or_else(|| GastosError::expense_not_found(id.to_string()))
    }

    /// Find an expense by ID, full UUID or the short form listings print
    pub fn find(&self, owner_id: OwnerId, identifier: &str) -> GastosResult<ExpenseRecord> {
        if let Ok(id) = identifier.parse::<ExpenseId>() {
            return self.get(owner_id, id);
        }

        self.list(owner_id)?
            .into_iter()
            .find(|e| e.id.to_string() == identifier)
            .ok_or_else(|| GastosError::expense_not_found(identifier.to_string()))
    }

    /// List the caller's expenses in creation order
    pub fn list(&self, owner_id: OwnerId) -> GastosResult<Vec<ExpenseRecord>> {
        self.storage.expenses.get_by_owner(owner_id)
    }

    /// Filtered, ordered, paginated view of the caller's expenses
    pub fn view(
        &self,
        owner_id: OwnerId,
        filter: &ExpenseFilter,
        today: NaiveDate,
    ) -> GastosResult<ExpenseView> {
        let records = self.list(owner_id)?;
        Ok(view(&records, filter, today))
    }

    /// Update an expense
    pub fn update(
        &self,
        owner_id: OwnerId,
        id: ExpenseId,
        description: Option<String>,
        amount: Option<Money>,
        method: Option<PaymentMethod>,
        due_date: Option<NaiveDate>,
        category: Option<Option<String>>,
    ) -> GastosResult<ExpenseRecord> {
        let mut expense = self.get(owner_id, id)?;
        let before = expense.clone();

        if let Some(new_description) = description {
            expense.description = new_description.trim().to_string();
        }
        if let Some(new_amount) = amount {
            expense.amount = new_amount;
        }
        if let Some(new_method) = method {
            expense.method = new_method;
        }
        if let Some(new_due_date) = due_date {
            expense.due_date = new_due_date;
        }
        // category: None = no change, Some(None) = clear, Some(Some(c)) = set
        if let Some(new_category) = category {
            expense.category = new_category;
        }
        expense.updated_at = Utc::now();

        expense
            .validate()
            .map_err(|e| GastosError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        let mut changes = Vec::new();
        if before.description != expense.description {
            changes.push(format!(
                "description: '{}' -> '{}'",
                before.description, expense.description
            ));
        }
        if before.amount != expense.amount {
            changes.push(format!("amount: {} -> {}", before.amount, expense.amount));
        }
        if before.method != expense.method {
            changes.push(format!("method: {} -> {}", before.method, expense.method));
        }
        if before.due_date != expense.due_date {
            changes.push(format!(
                "due date: {} -> {}",
                before.due_date, expense.due_date
            ));
        }
        if before.category != expense.category {
            changes.push(format!(
                "category: {:?} -> {:?}",
                before.category, expense.category
            ));
        }

        let detail = if changes.is_empty() {
            None
        } else {
            Some(changes.join(", "))
        };

        self.storage.log_update(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            detail,
        )?;

        Ok(expense)
    }

    /// Set the paid flag on an expense
    pub fn set_paid(&self, owner_id: OwnerId, id: ExpenseId, paid: bool) -> GastosResult<ExpenseRecord> {
        let mut expense = self.get(owner_id, id)?;

        if expense.paid == paid {
            return Ok(expense);
        }

        let before = expense.paid;
        expense.set_paid(paid);

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_update(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            Some(format!("paid: {} -> {}", before, paid)),
        )?;

        Ok(expense)
    }

    /// Delete an expense
    pub fn delete(&self, owner_id: OwnerId, id: ExpenseId) -> GastosResult<ExpenseRecord> {
        let expense = self.get(owner_id, id)?;

        self.storage.expenses.delete(id)?;
        self.storage.expenses.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            id.to_string(),
            Some(expense.description.clone()),
        )?;

        Ok(expense)
    }

    /// Count the caller's expenses
    pub fn count(&self, owner_id: OwnerId) -> GastosResult<usize> {
        Ok(self.list(owner_id)?.len())
    }
}
