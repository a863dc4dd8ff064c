//! YAML snapshot export
//!
//! Same content as the JSON snapshot, in a form that is easier to read.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::Snapshot;
use crate::models::TrackerState;

/// Write a YAML snapshot of the state
pub fn export_snapshot_yaml<W: Write>(state: &TrackerState, mut writer: W) -> TrackerResult<()> {
    let snapshot = Snapshot::from_state(state);

    writeln!(writer, "# Expense tracker snapshot")
        .and_then(|_| writeln!(writer, "# Generated: {}", snapshot.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", snapshot.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &snapshot).map_err(|e| TrackerError::Export(e.to_string()))
}

/// Read a YAML snapshot back and validate it
pub fn read_snapshot_yaml(yaml_str: &str) -> TrackerResult<Snapshot> {
    let snapshot: Snapshot =
        serde_yaml::from_str(yaml_str).map_err(|e| TrackerError::Validation(e.to_string()))?;
    snapshot.validate().map_err(TrackerError::Validation)?;
    Ok(snapshot)
}
