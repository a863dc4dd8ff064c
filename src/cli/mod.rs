//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod category;
pub mod expense;
pub mod export;
pub mod month;
pub mod prompt;

pub use budget::handle_budget_overview;
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_add, handle_delete, handle_list};
pub use export::{handle_export_command, ExportCommands, SnapshotFormat};
pub use month::{handle_month_command, MonthCommands};
