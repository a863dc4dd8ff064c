//! Export module for the expense tracker
//!
//! - CSV: the expense ledger, spreadsheet-compatible
//! - JSON: full state snapshot, machine-readable
//! - YAML: full state snapshot, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{default_file_name, export_expenses_csv, expenses_to_csv, write_expenses_csv};
pub use json::{
    export_snapshot_json, read_snapshot_json, Snapshot, SnapshotMetadata, SNAPSHOT_SCHEMA_VERSION,
};
pub use yaml::{export_snapshot_yaml, read_snapshot_yaml};
