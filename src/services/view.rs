//! Read-side view over expenses
//!
//! Filtering, ordering, and pagination for expense listings. Works on an
//! in-memory slice the caller already loaded; classification happens here so
//! every consumer sees the same statuses the same way.

use chrono::NaiveDate;

use crate::models::ExpenseRecord;
use crate::services::status::DerivedStatus;

/// Entries shown per page when the caller does not choose
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Composable expense filters, combined by AND
#[derive(Debug, Clone)]
pub struct ExpenseFilter {
    /// Case-insensitive substring match on the description
    pub text: Option<String>,
    /// Inclusive lower bound on the due date
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the due date
    pub to: Option<NaiveDate>,
    /// Exact derived status
    pub status: Option<DerivedStatus>,
    /// 1-based page number; out-of-range values clamp, never error
    pub page: usize,
    /// Entries per page
    pub page_size: usize,
}

impl Default for ExpenseFilter {
    fn default() -> Self {
        Self {
            text: None,
            from: None,
            to: None,
            status: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Match descriptions containing the text
    pub fn matching(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Keep records due within the inclusive range
    pub fn due_between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Keep records due on or after the date
    pub fn due_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Keep records due on or before the date
    pub fn due_until(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Keep records with exactly this status
    pub fn with_status(mut self, status: DerivedStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Select a page
    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Set the page size
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// One page of classified expenses plus the filtered totals
#[derive(Debug, Clone)]
pub struct ExpenseView {
    /// The requested page, in display order
    pub entries: Vec<(ExpenseRecord, DerivedStatus)>,
    /// Count of records matching the filters across all pages
    pub total: usize,
    /// The page actually returned, after clamping
    pub page: usize,
    /// Number of pages the filtered set spans
    pub page_count: usize,
}

/// Filter, order, and paginate expenses as of `today`
///
/// Ordering is priority first (overdue, due soon, upcoming, paid), then
/// ascending due date; records equal on both keep their input order. The
/// page number clamps into range, so page 0 returns the first page and a
/// page past the end returns the last.
pub fn view(records: &[ExpenseRecord], filter: &ExpenseFilter, today: NaiveDate) -> ExpenseView {
    let needle = filter
        .text
        .as_ref()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty());

    let mut entries: Vec<(ExpenseRecord, DerivedStatus)> = records
        .iter()
        .map(|r| (r.clone(), DerivedStatus::of_expense(r, today)))
        .filter(|(r, status)| {
            if let Some(needle) = &needle {
                if !r.description.to_lowercase().contains(needle) {
                    return false;
                }
            }
            if let Some(from) = filter.from {
                if r.due_date < from {
                    return false;
                }
            }
            if let Some(to) = filter.to {
                if r.due_date > to {
                    return false;
                }
            }
            if let Some(wanted) = filter.status {
                if *status != wanted {
                    return false;
                }
            }
            true
        })
        .collect();

    // Stable, so equal keys preserve input order
    entries.sort_by_key(|(r, status)| (status.priority(), r.due_date));

    let total = entries.len();
    let page_size = filter.page_size.max(1);
    let page_count = ((total + page_size - 1) / page_size).max(1);
    let page = filter.page.clamp(1, page_count);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total);
    let entries = if start < total {
        entries[start..end].to_vec()
    } else {
        Vec::new()
    };

    ExpenseView {
        entries,
        total,
        page,
        page_count,
    }
}
