//! Export CLI commands

use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};
use crate::export::{default_file_name, export_expenses_csv, export_snapshot_json, export_snapshot_yaml};
use crate::storage::Storage;

/// Snapshot formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export expenses as CSV
    Csv {
        /// Output file ("-" for stdout); defaults to expenses-<month>.csv
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the complete state for backup
    Snapshot {
        /// Output file
        path: PathBuf,
        #[arg(short, long, value_enum, default_value = "json")]
        format: SnapshotFormat,
    },
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> TrackerResult<()> {
    let state = storage.state();

    match cmd {
        ExportCommands::Csv { output } => {
            let path = output.unwrap_or_else(|| PathBuf::from(default_file_name(state.month)));

            if path.as_os_str() == "-" {
                export_expenses_csv(&state.expenses, io::stdout().lock())?;
            } else {
                let mut writer = BufWriter::new(create_file(&path)?);
                export_expenses_csv(&state.expenses, &mut writer)?;
                writer.flush()?;
                println!(
                    "Exported {} expense(s) to {}",
                    state.expenses.len(),
                    path.display()
                );
            }
        }

        ExportCommands::Snapshot { path, format } => {
            let mut writer = BufWriter::new(create_file(&path)?);
            match format {
                SnapshotFormat::Json => export_snapshot_json(state, &mut writer, true)?,
                SnapshotFormat::Yaml => export_snapshot_yaml(state, &mut writer)?,
            }
            writer.flush()?;
            println!("Snapshot written to {}", path.display());
        }
    }

    Ok(())
}

fn create_file(path: &Path) -> TrackerResult<File> {
    File::create(path)
        .map_err(|e| TrackerError::Export(format!("Failed to create {}: {}", path.display(), e)))
}
