//! Display formatting for terminal output
//!
//! Plain-text renderers for the expense register and the budget overview.

pub mod budget;
pub mod expense;

pub use budget::{format_budget_overview, format_category_list, progress_bar};
pub use expense::{format_expense_list, format_expense_row};
