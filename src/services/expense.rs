//! Expense service
//!
//! Adds and deletes expense records, persisting the ledger after every change.

use chrono::{DateTime, Local, TimeZone};
use std::collections::BTreeMap;

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseDraft, ExpenseId, Money};
use crate::storage::Storage;

/// Service for the expense ledger
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

/// Raw form input for a new expense
#[derive(Debug, Clone, Default)]
pub struct AddExpenseInput {
    /// Amount as typed; blank means "nothing to add"
    pub amount: String,
    /// Category name; defaults to the first registered category
    pub category: Option<String>,
    pub note: Option<String>,
}

impl AddExpenseInput {
    pub fn new(amount: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            ..Self::default()
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Record an expense at the current local time
    ///
    /// Returns `Ok(None)` without touching state when the amount is blank.
    pub fn add(&mut self, input: AddExpenseInput) -> TrackerResult<Option<Expense>> {
        self.add_at(input, &Local::now())
    }

    /// Record an expense stamped with `at`
    pub fn add_at<Tz: TimeZone>(
        &mut self,
        input: AddExpenseInput,
        at: &DateTime<Tz>,
    ) -> TrackerResult<Option<Expense>> {
        let amount = input.amount.trim();
        if amount.is_empty() {
            return Ok(None);
        }

        let amount = Money::parse(amount)
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let category = match input.category.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self
                .storage
                .state()
                .categories
                .first()
                .map(|c| c.name.clone())
                .ok_or_else(|| {
                    TrackerError::Validation(
                        "No category given and no categories are defined".into(),
                    )
                })?,
        };

        let note = input.note.as_deref().map(str::trim).unwrap_or_default();
        let draft = ExpenseDraft::new(amount, category, note);

        let expense = self.storage.state_mut().expenses.add(draft, at).clone();
        self.storage.save_expenses()?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.category.clone()),
            &expense,
        );

        Ok(Some(expense))
    }

    /// Delete an expense by id
    ///
    /// Returns the removed record, or `Ok(None)` if no record has that id.
    pub fn delete(&mut self, id: ExpenseId) -> TrackerResult<Option<Expense>> {
        let Some(expense) = self.storage.state_mut().expenses.delete(id) else {
            return Ok(None);
        };
        self.storage.save_expenses()?;

        self.storage.log_delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.category.clone()),
            &expense,
        );

        Ok(Some(expense))
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.storage.state().expenses.get(id)
    }

    /// All expenses in the order they were recorded
    pub fn list(&self) -> &[Expense] {
        self.storage.state().expenses.as_slice()
    }

    /// Total spend per category; categories without expenses are absent
    pub fn spent_by_category(&self) -> BTreeMap<String, Money> {
        self.storage.state().expenses.spent_by_category()
    }

    /// Total of all expenses
    pub fn total(&self) -> Money {
        self.storage.state().expenses.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use crate::config::paths::TrackerPaths;
    use crate::models::Month;
    use crate::storage::MemoryStore;
    use chrono::Utc;
    use tempfile::TempDir;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn storage() -> Storage {
        let mut storage = Storage::in_memory();
        storage.load_as_of(Month::new(2024, 1).unwrap()).unwrap();
        storage
    }

    #[test]
    fn test_add_expense() {
        let mut storage = storage();
        let mut service = ExpenseService::new(&mut storage);

        let expense = service
            .add_at(
                AddExpenseInput::new("250.5").category("Transport").note("  taxi "),
                &noon(),
            )
            .unwrap()
            .unwrap();

        assert_eq!(expense.amount, Money::from_cents(25050));
        assert_eq!(expense.category, "Transport");
        assert_eq!(expense.note, "taxi");
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn test_blank_amount_is_skipped() {
        let mut storage = storage();
        let mut service = ExpenseService::new(&mut storage);

        assert!(service.add_at(AddExpenseInput::new("   "), &noon()).unwrap().is_none());
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_malformed_amount_is_rejected() {
        let mut storage = storage();
        let mut service = ExpenseService::new(&mut storage);

        let err = service
            .add_at(AddExpenseInput::new("12abc"), &noon())
            .unwrap_err();
        assert!(err.is_validation());
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_amount_beyond_limit_is_rejected() {
        let mut storage = storage();
        let mut service = ExpenseService::new(&mut storage);

        for _ in 0..2 {
            assert!(service
                .add_at(AddExpenseInput::new("50000000000000000"), &noon())
                .unwrap_err()
                .is_validation());
        }
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_largest_amounts_still_sum() {
        let mut storage = storage();
        let mut service = ExpenseService::new(&mut storage);

        for _ in 0..3 {
            service
                .add_at(AddExpenseInput::new("1000000000000").category("Food"), &noon())
                .unwrap()
                .unwrap();
        }

        let expected = Money::from_units(3_000_000_000_000);
        assert_eq!(service.spent_by_category().get("Food"), Some(&expected));
        assert_eq!(service.total(), expected);
    }

    #[test]
    fn test_zero_and_negative_amounts_accepted() {
        let mut storage = storage();
        let mut service = ExpenseService::new(&mut storage);

        service.add_at(AddExpenseInput::new("0"), &noon()).unwrap().unwrap();
        service.add_at(AddExpenseInput::new("-40"), &noon()).unwrap().unwrap();
        assert_eq!(service.total(), Money::from_units(-40));
    }

    #[test]
    fn test_category_defaults_to_first_registered() {
        let mut storage = storage();
        let mut service = ExpenseService::new(&mut storage);

        let expense = service
            .add_at(AddExpenseInput::new("10").category(" "), &noon())
            .unwrap()
            .unwrap();
        assert_eq!(expense.category, "Food");
    }

    #[test]
    fn test_no_categories_and_no_category_given() {
        let mut storage = storage();
        for name in ["Food", "Rent", "Transport"] {
            storage.state_mut().categories.remove(name);
        }
        let mut service = ExpenseService::new(&mut storage);

        assert!(service
            .add_at(AddExpenseInput::new("10"), &noon())
            .unwrap_err()
            .is_validation());

        // An explicit, unregistered category is still accepted
        let expense = service
            .add_at(AddExpenseInput::new("10").category("Misc"), &noon())
            .unwrap()
            .unwrap();
        assert_eq!(expense.category, "Misc");
    }

    #[test]
    fn test_delete_expense() {
        let mut storage = storage();
        let mut service = ExpenseService::new(&mut storage);

        let a = service.add_at(AddExpenseInput::new("5"), &noon()).unwrap().unwrap();
        let b = service.add_at(AddExpenseInput::new("5"), &noon()).unwrap().unwrap();

        assert_eq!(service.delete(a.id).unwrap().unwrap().id, a.id);
        assert!(service.delete(a.id).unwrap().is_none());
        assert_eq!(service.list(), [b.clone()]);
        assert!(service.get(b.id).is_some());
        assert_eq!(service.spent_by_category().get("Food"), Some(&Money::from_units(5)));
    }

    #[test]
    fn test_changes_are_persisted_and_audited() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::open(&paths).unwrap();
        storage.load().unwrap();

        let id = {
            let mut service = ExpenseService::new(&mut storage);
            let expense = service.add(AddExpenseInput::new("99")).unwrap().unwrap();
            service.delete(expense.id).unwrap();
            service.add(AddExpenseInput::new("12")).unwrap().unwrap().id
        };

        let mut reopened = Storage::open(&paths).unwrap();
        reopened.load().unwrap();
        let ids: Vec<_> = reopened.state().expenses.iter().map(|e| e.id).collect();
        assert_eq!(ids, [id]);

        let entries = storage.audit_logger().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_audit_failure_does_not_fail_saved_change() {
        let temp_dir = TempDir::new().unwrap();
        // The log path is a directory, so appends fail
        let mut storage = Storage::new(
            Box::new(MemoryStore::new()),
            Some(AuditLogger::new(temp_dir.path().to_path_buf())),
        );
        storage.load_as_of(Month::new(2024, 1).unwrap()).unwrap();

        let expense = ExpenseService::new(&mut storage)
            .add_at(AddExpenseInput::new("42"), &noon())
            .unwrap()
            .unwrap();

        assert_eq!(storage.state().expenses.len(), 1);
        assert_eq!(storage.take_audit_failures().len(), 1);

        ExpenseService::new(&mut storage).delete(expense.id).unwrap().unwrap();
        assert!(storage.state().expenses.is_empty());
        assert_eq!(storage.take_audit_failures().len(), 1);
    }
}
