//! Expense ledger
//!
//! Ordered list of expense records plus the per-category spend derived from
//! it. Persisted as a JSON array.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::expense::{Expense, ExpenseDraft};
use super::ids::ExpenseId;
use super::money::Money;

/// All recorded expenses, in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter()
    }

    pub fn as_slice(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Record a new expense stamped with the local date and time of `at`
    pub fn add<Tz: TimeZone>(&mut self, draft: ExpenseDraft, at: &DateTime<Tz>) -> &Expense {
        let latest = self.expenses.iter().map(|e| e.id).max();
        let id = ExpenseId::generate(at.timestamp_millis(), latest);
        let local = at.naive_local();

        self.expenses
            .push(Expense::from_draft(id, draft, local.date(), local.time()));
        &self.expenses[self.expenses.len() - 1]
    }

    /// Append an already-built record
    pub fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Remove the record with the given id, if present
    pub fn delete(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(index))
    }

    /// Remove every record, returning them
    pub fn clear(&mut self) -> Vec<Expense> {
        std::mem::take(&mut self.expenses)
    }

    /// Total spend per category name; categories without expenses are absent
    pub fn spent_by_category(&self) -> BTreeMap<String, Money> {
        let mut totals = BTreeMap::new();
        for expense in &self.expenses {
            *totals.entry(expense.category.clone()).or_insert_with(Money::zero) += expense.amount;
        }
        totals
    }

    /// Total spend for one category, zero if it has no expenses
    pub fn spent_in(&self, category: &str) -> Money {
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.amount)
            .sum()
    }

    /// Total of all expenses
    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }
}
