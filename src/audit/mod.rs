//! Audit logging for the expense tracker
//!
//! Records every change to expenses, categories and the month marker in an
//! append-only, line-delimited JSON log.
//!
//! - `AuditEntry`: a single entry with timestamp, operation, entity
//!   information and optional before/after values.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
