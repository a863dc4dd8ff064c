//! Core data models for the expense tracker
//!
//! This module contains the data structures of the tracking domain: money,
//! expense records, the budget registry, the month marker and the derived
//! budget status.

pub mod expense;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod period;
pub mod registry;
pub mod state;
pub mod status;

pub use expense::{Expense, ExpenseDraft};
pub use ids::ExpenseId;
pub use ledger::ExpenseLedger;
pub use money::{Money, MoneyParseError};
pub use period::Month;
pub use registry::{BudgetRegistry, CategoryBudget, DEFAULT_CATEGORIES};
pub use state::TrackerState;
pub use status::{BudgetLevel, BudgetStatus, Thresholds};
