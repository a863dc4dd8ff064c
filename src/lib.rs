//! Expense tracker - personal expenses against monthly category budgets
//!
//! This library provides the core of the `expense` command-line tool: an
//! ordered budget registry, a ledger of expense records, derived spend and
//! remaining budget per category, a month marker with a destructive reset,
//! and CSV export. State is kept in a string key-value store so it survives
//! restarts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, registry, month, status)
//! - `storage`: Key-value persistence and the state coordinator
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `export`: CSV and snapshot export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::services::{AddExpenseInput, BudgetService, ExpenseService};
//! use expense_tracker::storage::Storage;
//!
//! let mut storage = Storage::in_memory();
//! storage.load().unwrap();
//!
//! ExpenseService::new(&mut storage)
//!     .add(AddExpenseInput::new("120").category("Food"))
//!     .unwrap();
//!
//! let status = BudgetService::new(&mut storage).status("Food").unwrap();
//! assert_eq!(status.remaining.to_string(), "7880");
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::TrackerError;
