//! Installment expansion
//!
//! Turns one entered purchase into its ordered sequence of monthly drafts.
//! The expansion is pure: it returns the full draft set and persists nothing,
//! so a caller can only ever store all installments or none.

use chrono::NaiveDate;

use crate::error::{GastosError, GastosResult};
use crate::models::{add_months, ExpenseRecord, Money, OwnerId, PaymentMethod};

/// Everything needed to expand one purchase into installment drafts
#[derive(Debug, Clone)]
pub struct InstallmentPlan {
    pub owner_id: OwnerId,
    pub description: String,
    /// Total purchase amount, divided across the installments
    pub total_amount: Money,
    pub method: PaymentMethod,
    /// Due date of the first installment
    pub start_date: NaiveDate,
    /// Number of monthly installments; `None` means a single payment
    pub installment_count: Option<u32>,
    pub category: Option<String>,
    /// Historical import aid: installments due strictly before this date
    /// are created already marked paid
    pub paid_before: Option<NaiveDate>,
}

/// Expand a purchase into dated installment drafts
///
/// The total is divided in integer cents with the remainder folded into the
/// last installment, so the drafts always sum back to the entered amount.
/// Due dates advance one calendar month per installment, clamping to the
/// last day of shorter months. Validation failures name the offending field
/// and reject the whole plan; a partial sequence is never returned.
pub fn expand(plan: InstallmentPlan) -> GastosResult<Vec<ExpenseRecord>> {
    let description = plan.description.trim();
    if description.is_empty() {
        return Err(GastosError::Validation(
            "description must not be empty".into(),
        ));
    }

    if !plan.total_amount.is_positive() {
        return Err(GastosError::Validation(
            "amount must be greater than zero".into(),
        ));
    }

    if plan.installment_count == Some(0) {
        return Err(GastosError::Validation(
            "installments must be at least 1".into(),
        ));
    }
    let count = plan.installment_count.unwrap_or(1);

    if plan.total_amount.cents() < count as i64 {
        return Err(GastosError::Validation(format!(
            "amount must be at least one cent per installment ({} installments)",
            count
        )));
    }

    let amounts = plan.total_amount.split(count);
    let mut drafts = Vec::with_capacity(count as usize);

    for (index, amount) in amounts.into_iter().enumerate() {
        let due_date = add_months(plan.start_date, index as u32);

        let label = if count > 1 {
            format!("{} - Parcela {}/{}", description, index + 1, count)
        } else {
            description.to_string()
        };

        let mut draft = ExpenseRecord::new(plan.owner_id, label, amount, plan.method, due_date);
        draft.installment_index = index as u32 + 1;
        draft.installment_count = count;
        draft.category = plan.category.clone();

        if let Some(cutoff) = plan.paid_before {
            if due_date < cutoff {
                draft.paid = true;
            }
        }

        draft
            .validate()
            .map_err(|e| GastosError::Validation(e.to_string()))?;

        drafts.push(draft);
    }

    Ok(drafts)
}
