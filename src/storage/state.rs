//! Encoding of the tracker state into key-value entries
//!
//! | key          | value                                   |
//! |--------------|-----------------------------------------|
//! | `expenses`   | JSON array of expense records           |
//! | `categories` | JSON object mapping name to budget      |
//! | `month`      | plain `YYYY-MM` string                  |
//!
//! Missing keys fall back to first-run defaults. Unreadable values also fall
//! back, and are reported as [`LoadWarning`]s instead of failing the load.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetRegistry, ExpenseLedger, Month, TrackerState};

use super::kv::KeyValueStore;

pub const EXPENSES_KEY: &str = "expenses";
pub const CATEGORIES_KEY: &str = "categories";
pub const MONTH_KEY: &str = "month";

/// A persisted value that could not be read and was replaced by its default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub key: &'static str,
    pub message: String,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stored '{}' could not be read ({}); using defaults",
            self.key, self.message
        )
    }
}

/// Read the full state from a store
///
/// Only store access failures are errors; bad data is reported as warnings.
pub fn load_state(
    store: &dyn KeyValueStore,
    default_month: Month,
) -> TrackerResult<(TrackerState, Vec<LoadWarning>)> {
    let mut warnings = Vec::new();

    let month = match store.get(MONTH_KEY)? {
        None => default_month,
        Some(raw) => match raw.trim().parse::<Month>() {
            Ok(month) => month,
            Err(e) => {
                warnings.push(LoadWarning {
                    key: MONTH_KEY,
                    message: e.to_string(),
                });
                default_month
            }
        },
    };

    let categories = load_json(store, CATEGORIES_KEY, &mut warnings)?
        .unwrap_or_else(BudgetRegistry::with_defaults);
    let expenses = load_json(store, EXPENSES_KEY, &mut warnings)?.unwrap_or_else(ExpenseLedger::new);

    Ok((
        TrackerState {
            month,
            categories,
            expenses,
        },
        warnings,
    ))
}

fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &'static str,
    warnings: &mut Vec<LoadWarning>,
) -> TrackerResult<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    // A stored JSON null is what an empty slot looks like to older writers
    if raw.trim().is_empty() || raw.trim() == "null" {
        return Ok(None);
    }

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warnings.push(LoadWarning {
                key,
                message: e.to_string(),
            });
            Ok(None)
        }
    }
}

pub fn encode_expenses(expenses: &ExpenseLedger) -> TrackerResult<String> {
    serde_json::to_string(expenses)
        .map_err(|e| TrackerError::Json(format!("Failed to serialize expenses: {}", e)))
}

pub fn encode_categories(categories: &BudgetRegistry) -> TrackerResult<String> {
    serde_json::to_string(categories)
        .map_err(|e| TrackerError::Json(format!("Failed to serialize categories: {}", e)))
}

pub fn encode_month(month: Month) -> String {
    month.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::kv::MemoryStore;

    fn january() -> Month {
        Month::new(2024, 1).unwrap()
    }

    #[test]
    fn test_empty_store_gives_defaults() {
        let store = MemoryStore::new();
        let (state, warnings) = load_state(&store, january()).unwrap();

        assert!(warnings.is_empty());
        assert_eq!(state, TrackerState::defaults(january()));
    }

    #[test]
    fn test_reads_existing_values() {
        let mut store = MemoryStore::new();
        store.set(MONTH_KEY, "2023-11").unwrap();
        store.set(CATEGORIES_KEY, r#"{"Books": 500}"#).unwrap();
        store
            .set(
                EXPENSES_KEY,
                r#"[{"id": 1, "amount": 100, "category": "Books", "date": "2023-11-02", "time": "08:15", "note": "novel"}]"#,
            )
            .unwrap();

        let (state, warnings) = load_state(&store, january()).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(state.month, Month::new(2023, 11).unwrap());
        assert_eq!(state.categories.get("Books"), Some(Money::from_units(500)));
        assert_eq!(state.categories.len(), 1);
        assert_eq!(state.expenses.len(), 1);
        assert_eq!(state.expenses.as_slice()[0].note, "novel");
    }

    #[test]
    fn test_corrupt_values_fall_back_with_warnings() {
        let mut store = MemoryStore::new();
        store.set(MONTH_KEY, "next month").unwrap();
        store.set(CATEGORIES_KEY, "{broken").unwrap();
        store.set(EXPENSES_KEY, r#"[{"id": "x"}]"#).unwrap();

        let (state, warnings) = load_state(&store, january()).unwrap();
        assert_eq!(state, TrackerState::defaults(january()));

        let keys: Vec<_> = warnings.iter().map(|w| w.key).collect();
        assert_eq!(keys, [MONTH_KEY, CATEGORIES_KEY, EXPENSES_KEY]);
        assert!(warnings[0].to_string().contains("using defaults"));
    }

    #[test]
    fn test_null_values_are_absent() {
        let mut store = MemoryStore::new();
        store.set(CATEGORIES_KEY, "null").unwrap();
        store.set(EXPENSES_KEY, "null").unwrap();

        let (state, warnings) = load_state(&store, january()).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(state.categories, BudgetRegistry::with_defaults());
    }

    #[test]
    fn test_encode_layout() {
        let state = TrackerState::defaults(january());
        assert_eq!(
            encode_categories(&state.categories).unwrap(),
            r#"{"Food":8000,"Rent":15000,"Transport":3000}"#
        );
        assert_eq!(encode_expenses(&state.expenses).unwrap(), "[]");
        assert_eq!(encode_month(state.month), "2024-01");
    }
}
