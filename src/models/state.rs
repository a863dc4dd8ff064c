//! Root tracker state
//!
//! Holds the three persisted values: the active month, the budget registry
//! and the expense ledger.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ledger::ExpenseLedger;
use super::money::Money;
use super::period::Month;
use super::registry::BudgetRegistry;
use super::status::{BudgetStatus, Thresholds};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerState {
    pub month: Month,
    pub categories: BudgetRegistry,
    pub expenses: ExpenseLedger,
}

impl TrackerState {
    /// First-run state: default categories, no expenses
    pub fn defaults(month: Month) -> Self {
        Self {
            month,
            categories: BudgetRegistry::with_defaults(),
            expenses: ExpenseLedger::new(),
        }
    }

    /// Status of a single category; unregistered categories have a zero budget
    pub fn status(&self, category: &str, thresholds: Thresholds) -> BudgetStatus {
        BudgetStatus::compute(
            category,
            self.categories.get(category).unwrap_or_default(),
            self.expenses.spent_in(category),
            thresholds,
        )
    }

    /// Status of every registered category, in registry order
    pub fn statuses(&self, thresholds: Thresholds) -> Vec<BudgetStatus> {
        let spent = self.expenses.spent_by_category();
        self.categories
            .iter()
            .map(|entry| {
                BudgetStatus::compute(
                    entry.name.clone(),
                    entry.budget,
                    spent.get(&entry.name).copied().unwrap_or_default(),
                    thresholds,
                )
            })
            .collect()
    }

    /// Spend recorded against categories that are no longer registered
    pub fn orphaned_spend(&self) -> BTreeMap<String, Money> {
        self.expenses
            .spent_by_category()
            .into_iter()
            .filter(|(name, _)| !self.categories.contains(name))
            .collect()
    }
}
