//! Category CLI commands
//!
//! Implements CLI commands for managing the budget registry.

use clap::Subcommand;

use crate::cli::prompt::confirmer;
use crate::config::settings::Settings;
use crate::display::budget::format_category_list;
use crate::error::TrackerResult;
use crate::services::{AddCategoryOutcome, BudgetService};
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories and their monthly budgets
    List,

    /// Add a category, or overwrite the budget of an existing one
    Add {
        /// Category name
        name: String,
        /// Monthly budget (e.g., "8000" or "250.50")
        #[arg(allow_hyphen_values = true)]
        budget: String,
    },

    /// Change the budget of an existing category
    Set {
        /// Category name
        name: String,
        /// New monthly budget
        #[arg(allow_hyphen_values = true)]
        budget: String,
    },

    /// Remove a category (its expenses are kept)
    #[command(alias = "rm")]
    Remove {
        /// Category name
        name: String,
        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a category command
pub fn handle_category_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let mut service = BudgetService::new(storage).with_thresholds(settings.thresholds());

    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(&service.list(), symbol));
        }

        CategoryCommands::Add { name, budget } => match service.add_category(&name, &budget)? {
            Some(AddCategoryOutcome::Created) => {
                println!("Added category: {}", name.trim());
            }
            Some(AddCategoryOutcome::Replaced { previous }) => {
                println!(
                    "Updated category: {} (was {})",
                    name.trim(),
                    previous.format_with_symbol(symbol)
                );
            }
            None => println!("Name and budget are both required, nothing added."),
        },

        CategoryCommands::Set { name, budget } => {
            let previous = service.update_budget(&name, &budget)?;
            let status = service.status(name.trim())?;
            println!(
                "Budget for {}: {} -> {}",
                status.category,
                previous.format_with_symbol(symbol),
                status.budget.format_with_symbol(symbol)
            );
        }

        CategoryCommands::Remove { name, yes } => {
            let mut confirm = confirmer(yes);
            if service.remove_category(&name, &mut confirm)? {
                println!("Removed category: {}", name.trim());
            } else {
                println!("Aborted.");
            }
        }
    }

    Ok(())
}
