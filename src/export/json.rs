//! JSON snapshot export
//!
//! A snapshot is the complete tracker state plus metadata, suitable for
//! backup or for reading back into another tool.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetRegistry, Expense, Money, Month, TrackerState};

/// Current snapshot schema version
pub const SNAPSHOT_SCHEMA_VERSION: &str = "1.0.0";

/// Full state snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the snapshot
    pub app_version: String,

    pub month: Month,

    pub categories: BudgetRegistry,

    pub expenses: Vec<Expense>,

    pub metadata: SnapshotMetadata,
}

/// Snapshot metadata for reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub expense_count: usize,
    pub category_count: usize,

    /// Sum of all expense amounts
    pub total_spent: Money,

    /// Sum of all category budgets
    pub total_budget: Money,

    /// Date range of expenses (earliest)
    pub earliest_expense: Option<String>,

    /// Date range of expenses (latest)
    pub latest_expense: Option<String>,
}

impl Snapshot {
    /// Capture the given state
    pub fn from_state(state: &TrackerState) -> Self {
        let expenses: Vec<Expense> = state.expenses.iter().cloned().collect();

        let metadata = SnapshotMetadata {
            expense_count: expenses.len(),
            category_count: state.categories.len(),
            total_spent: state.expenses.total(),
            total_budget: state.categories.total(),
            earliest_expense: expenses.iter().map(|e| e.date).min().map(|d| d.to_string()),
            latest_expense: expenses.iter().map(|e| e.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            month: state.month,
            categories: state.categories.clone(),
            expenses,
            metadata,
        }
    }

    /// Check the schema version and that metadata agrees with the contents
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != SNAPSHOT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                SNAPSHOT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.metadata.expense_count != self.expenses.len() {
            return Err(format!(
                "Metadata lists {} expenses but snapshot contains {}",
                self.metadata.expense_count,
                self.expenses.len()
            ));
        }

        if self.metadata.category_count != self.categories.len() {
            return Err(format!(
                "Metadata lists {} categories but snapshot contains {}",
                self.metadata.category_count,
                self.categories.len()
            ));
        }

        let mut ids: Vec<_> = self.expenses.iter().map(|e| e.id).collect();
        ids.sort();
        if ids.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err("Snapshot contains duplicate expense ids".to_string());
        }

        Ok(())
    }
}

/// Write a JSON snapshot of the state
pub fn export_snapshot_json<W: Write>(
    state: &TrackerState,
    writer: W,
    pretty: bool,
) -> TrackerResult<()> {
    let snapshot = Snapshot::from_state(state);

    if pretty {
        serde_json::to_writer_pretty(writer, &snapshot)
    } else {
        serde_json::to_writer(writer, &snapshot)
    }
    .map_err(|e| TrackerError::Export(e.to_string()))
}

/// Read a JSON snapshot back and validate it
pub fn read_snapshot_json(json_str: &str) -> TrackerResult<Snapshot> {
    let snapshot: Snapshot = serde_json::from_str(json_str)?;
    snapshot.validate().map_err(TrackerError::Validation)?;
    Ok(snapshot)
}
