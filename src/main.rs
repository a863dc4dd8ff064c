use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add, handle_budget_overview, handle_category_command, handle_delete,
    handle_export_command, handle_list, handle_month_command, CategoryCommands, ExportCommands,
    MonthCommands,
};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::models::ExpenseId;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracker with monthly category budgets",
    long_about = "Record expenses against categories, watch spend against each \
                  category's monthly budget, start a fresh month and export \
                  the ledger as CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an expense
    Add {
        /// Amount (e.g., "250" or "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category; defaults to the first category
        #[arg(short, long)]
        category: Option<String>,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Delete an expense by id
    #[command(alias = "rm")]
    Delete {
        /// Expense id as shown by `expense list`
        id: ExpenseId,
    },

    /// List expenses for the current month
    #[command(alias = "ls")]
    List,

    /// Show spend against each category's budget
    Budget,

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Month management commands
    #[command(subcommand)]
    Month(MonthCommands),

    /// Export expenses or a full snapshot
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent changes from the audit log
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show configuration paths and settings
    Config {
        /// Write the current settings to the settings file for editing
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::open(&paths)?;
    for warning in storage.load()? {
        eprintln!("warning: {}", warning);
    }

    match cli.command {
        Some(Commands::Add {
            amount,
            category,
            note,
        }) => handle_add(&mut storage, &settings, amount, category, note)?,
        Some(Commands::Delete { id }) => handle_delete(&mut storage, &settings, id)?,
        Some(Commands::List) => handle_list(&mut storage, &settings)?,
        Some(Commands::Budget) => handle_budget_overview(&mut storage, &settings)?,
        Some(Commands::Category(cmd)) => handle_category_command(&mut storage, &settings, cmd)?,
        Some(Commands::Month(cmd)) => handle_month_command(&mut storage, &settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, cmd)?,
        Some(Commands::Log { count }) => match storage.audit_logger() {
            Some(logger) => {
                let entries = logger.read_recent(count)?;
                if entries.is_empty() {
                    println!("No changes recorded yet.");
                }
                for entry in entries {
                    println!("{}", entry.format_human_readable());
                }
            }
            None => println!("Audit logging is disabled."),
        },
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Settings written to {}", paths.settings_file().display());
                println!();
            }
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Warning ratio:   {}", settings.warning_ratio);
            println!("  Critical ratio:  {}", settings.critical_ratio);
            println!("  Bar width:       {}", settings.bar_width);
            println!();
            println!("Active month: {}", storage.state().month);
        }
        None => {
            println!("expense - personal expense tracker");
            println!();
            println!("Run 'expense --help' for usage information.");
        }
    }

    for failure in storage.take_audit_failures() {
        eprintln!("warning: change saved but not written to the audit log: {}", failure);
    }

    Ok(())
}
