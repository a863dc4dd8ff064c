//! Period service
//!
//! Starts a new accounting month: clears the ledger and moves the month
//! marker to the current calendar month. Budgets carry over unchanged.

use crate::audit::AuditEntry;
use crate::error::TrackerResult;
use crate::models::{Money, Month};
use crate::services::confirm::Confirm;
use crate::storage::Storage;

/// Service for month management
pub struct PeriodService<'a> {
    storage: &'a mut Storage,
}

/// Summary of a completed reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetSummary {
    pub previous_month: Month,
    pub new_month: Month,
    pub cleared: usize,
    pub cleared_total: Money,
}

impl<'a> PeriodService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// The active month
    pub fn current(&self) -> Month {
        self.storage.state().month
    }

    /// Start the current calendar month once the user confirms
    ///
    /// Returns `Ok(None)` if the user declined; nothing is changed then.
    pub fn reset_month(&mut self, confirm: &mut dyn Confirm) -> TrackerResult<Option<ResetSummary>> {
        self.reset_month_to(Month::current(), confirm)
    }

    /// Start `new_month` once the user confirms
    pub fn reset_month_to(
        &mut self,
        new_month: Month,
        confirm: &mut dyn Confirm,
    ) -> TrackerResult<Option<ResetSummary>> {
        let state = self.storage.state();
        let prompt = format!(
            "Start {}? All {} expense(s) recorded for {} will be deleted.",
            new_month,
            state.expenses.len(),
            state.month
        );
        if !confirm.confirm(&prompt) {
            return Ok(None);
        }

        let previous_month = state.month;
        let state = self.storage.state_mut();
        let cleared = state.expenses.clear();
        state.month = new_month;

        self.storage.save_expenses()?;
        self.storage.save_month()?;

        let summary = ResetSummary {
            previous_month,
            new_month,
            cleared: cleared.len(),
            cleared_total: cleared.iter().map(|e| e.amount).sum(),
        };

        let entry = AuditEntry::reset(
            previous_month.to_string(),
            new_month.to_string(),
            &cleared,
            format!(
                "month: {} -> {}, cleared {} expense(s) totalling {}",
                previous_month, new_month, summary.cleared, summary.cleared_total
            ),
        );
        self.storage.log_entry(&entry);

        Ok(Some(summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::ExpenseDraft;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn january() -> Month {
        Month::new(2024, 1).unwrap()
    }

    fn february() -> Month {
        Month::new(2024, 2).unwrap()
    }

    fn seed(storage: &mut Storage) {
        let at = Utc.with_ymd_and_hms(2024, 1, 20, 8, 15, 0).unwrap();
        let state = storage.state_mut();
        state.categories.upsert("Books", Money::from_units(500));
        state
            .expenses
            .add(ExpenseDraft::new(Money::from_units(100), "Food", ""), &at);
        state
            .expenses
            .add(ExpenseDraft::new(Money::from_cents(2550), "Books", "novel"), &at);
    }

    #[test]
    fn test_reset_clears_expenses_and_keeps_budgets() {
        let mut storage = Storage::in_memory();
        storage.load_as_of(january()).unwrap();
        seed(&mut storage);
        let categories = storage.state().categories.clone();

        let mut service = PeriodService::new(&mut storage);
        let summary = service
            .reset_month_to(february(), &mut |_: &str| true)
            .unwrap()
            .unwrap();

        assert_eq!(summary.previous_month, january());
        assert_eq!(summary.new_month, february());
        assert_eq!(summary.cleared, 2);
        assert_eq!(summary.cleared_total, Money::from_cents(12550));
        assert_eq!(service.current(), february());

        assert!(storage.state().expenses.is_empty());
        assert_eq!(storage.state().categories, categories);
    }

    #[test]
    fn test_declined_reset_changes_nothing() {
        let mut storage = Storage::in_memory();
        storage.load_as_of(january()).unwrap();
        seed(&mut storage);
        let before = storage.state().clone();

        let mut prompts = Vec::new();
        let mut decline = |prompt: &str| {
            prompts.push(prompt.to_string());
            false
        };
        let result = PeriodService::new(&mut storage)
            .reset_month_to(february(), &mut decline)
            .unwrap();

        assert!(result.is_none());
        assert_eq!(storage.state(), &before);
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("2 expense(s)"));
    }

    #[test]
    fn test_reset_uses_current_month() {
        let mut storage = Storage::in_memory();
        storage.load_as_of(january()).unwrap();

        let summary = PeriodService::new(&mut storage)
            .reset_month(&mut |_: &str| true)
            .unwrap()
            .unwrap();
        assert_eq!(summary.new_month, Month::current());
    }

    #[test]
    fn test_reset_is_persisted_and_audited() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut storage = Storage::open(&paths).unwrap();
        storage.load_as_of(january()).unwrap();
        seed(&mut storage);
        storage.save_all().unwrap();

        PeriodService::new(&mut storage)
            .reset_month_to(february(), &mut |_: &str| true)
            .unwrap();

        let mut reopened = Storage::open(&paths).unwrap();
        reopened.load_as_of(january()).unwrap();
        assert_eq!(reopened.state().month, february());
        assert!(reopened.state().expenses.is_empty());
        assert!(reopened.state().categories.contains("Books"));

        let entries = storage.audit_logger().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_id, "2024-01");
    }
}
