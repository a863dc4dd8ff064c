//! Service layer for the expense tracker
//!
//! Services sit on top of the storage layer. Each one validates raw input,
//! applies the state change, persists the keys it touched and records an
//! audit entry.

pub mod budget;
pub mod confirm;
pub mod expense;
pub mod period;

pub use budget::{AddCategoryOutcome, BudgetService};
pub use confirm::Confirm;
pub use expense::{AddExpenseInput, ExpenseService};
pub use period::{PeriodService, ResetSummary};
