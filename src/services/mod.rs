//! Service layer for gastos-cli
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, derived status, installment expansion, and the
//! filtered listing pipeline.

pub mod expenses;
pub mod fixed;
pub mod installments;
pub mod status;
pub mod view;

pub use expenses::ExpenseService;
pub use fixed::{CreateFixedExpenseInput, FixedExpenseService};
pub use installments::{expand, InstallmentPlan};
pub use status::{classify_due, DerivedStatus, DUE_SOON_WINDOW_DAYS};
pub use view::{view, ExpenseFilter, ExpenseView, DEFAULT_PAGE_SIZE};
