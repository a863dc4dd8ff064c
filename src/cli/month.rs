//! Month CLI commands

use clap::Subcommand;

use crate::cli::prompt::confirmer;
use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::services::PeriodService;
use crate::storage::Storage;

/// Month subcommands
#[derive(Subcommand)]
pub enum MonthCommands {
    /// Show the active month
    Show,

    /// Start a new month: delete all expenses and switch to the current month
    Reset {
        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a month command
pub fn handle_month_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: MonthCommands,
) -> TrackerResult<()> {
    let mut service = PeriodService::new(storage);

    match cmd {
        MonthCommands::Show => println!("{}", service.current()),

        MonthCommands::Reset { yes } => {
            let mut confirm = confirmer(yes);
            match service.reset_month(&mut confirm)? {
                Some(summary) => {
                    println!("Started {}.", summary.new_month);
                    println!(
                        "Cleared {} expense(s) from {} totalling {}.",
                        summary.cleared,
                        summary.previous_month,
                        summary.cleared_total.format_with_symbol(&settings.currency_symbol)
                    );
                }
                None => println!("Aborted."),
            }
        }
    }

    Ok(())
}
