//! Budget overview command

use crate::config::settings::Settings;
use crate::display::budget::format_budget_overview;
use crate::error::TrackerResult;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Show budget, spend and remaining amount per category
pub fn handle_budget_overview(storage: &mut Storage, settings: &Settings) -> TrackerResult<()> {
    let month = storage.state().month;
    let service = BudgetService::new(storage).with_thresholds(settings.thresholds());

    println!("Budget for {}", month);
    println!();
    print!(
        "{}",
        format_budget_overview(
            &service.statuses(),
            &service.orphaned(),
            &settings.currency_symbol,
            settings.bar_width,
        )
    );

    Ok(())
}
