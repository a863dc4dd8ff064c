//! Budget service
//!
//! Manages the budget registry: adding, re-budgeting and removing categories,
//! and reporting spend against each category's limit.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetStatus, CategoryBudget, Money, Thresholds};
use crate::services::confirm::Confirm;
use crate::storage::Storage;

/// Service for the budget registry
pub struct BudgetService<'a> {
    storage: &'a mut Storage,
    thresholds: Thresholds,
}

/// What `add_category` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddCategoryOutcome {
    Created,
    /// The category existed; its budget was overwritten in place
    Replaced { previous: Money },
}

/// Audit payload for category entries
#[derive(Serialize)]
struct CategoryRecord<'a> {
    name: &'a str,
    budget: Money,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self {
            storage,
            thresholds: Thresholds::default(),
        }
    }

    /// Use custom warning/critical thresholds for status reports
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Add a category or overwrite the budget of an existing one
    ///
    /// Blank name or budget input is skipped and returns `Ok(None)`.
    pub fn add_category(
        &mut self,
        name: &str,
        budget_input: &str,
    ) -> TrackerResult<Option<AddCategoryOutcome>> {
        let name = name.trim();
        let budget_input = budget_input.trim();
        if name.is_empty() || budget_input.is_empty() {
            return Ok(None);
        }

        let budget = parse_budget(budget_input)?;
        let previous = self.storage.state_mut().categories.upsert(name, budget);
        self.storage.save_categories()?;

        let after = CategoryRecord { name, budget };
        match previous {
            Some(previous) => {
                let before = CategoryRecord {
                    name,
                    budget: previous,
                };
                self.storage.log_update(
                    EntityType::Category,
                    name,
                    None,
                    &before,
                    &after,
                    Some(budget_diff(previous, budget)),
                );
                Ok(Some(AddCategoryOutcome::Replaced { previous }))
            }
            None => {
                self.storage
                    .log_create(EntityType::Category, name, None, &after);
                Ok(Some(AddCategoryOutcome::Created))
            }
        }
    }

    /// Overwrite the budget of an existing category, returning the old limit
    pub fn update_budget(&mut self, name: &str, budget_input: &str) -> TrackerResult<Money> {
        let name = name.trim();
        if !self.storage.state().categories.contains(name) {
            return Err(TrackerError::category_not_found(name));
        }

        let budget = parse_budget(budget_input.trim())?;
        let previous = self
            .storage
            .state_mut()
            .categories
            .set_budget(name, budget)
            .ok_or_else(|| TrackerError::category_not_found(name))?;
        self.storage.save_categories()?;

        self.storage.log_update(
            EntityType::Category,
            name,
            None,
            &CategoryRecord {
                name,
                budget: previous,
            },
            &CategoryRecord { name, budget },
            Some(budget_diff(previous, budget)),
        );

        Ok(previous)
    }

    /// Remove a category once the user confirms
    ///
    /// Expenses recorded against it are kept. Returns false if the user
    /// declined, leaving the registry unchanged.
    pub fn remove_category(
        &mut self,
        name: &str,
        confirm: &mut dyn Confirm,
    ) -> TrackerResult<bool> {
        let name = name.trim();
        if !self.storage.state().categories.contains(name) {
            return Err(TrackerError::category_not_found(name));
        }

        let prompt = format!("Delete category \"{}\"? Its expenses are kept.", name);
        if !confirm.confirm(&prompt) {
            return Ok(false);
        }

        let budget = self
            .storage
            .state_mut()
            .categories
            .remove(name)
            .ok_or_else(|| TrackerError::category_not_found(name))?;
        self.storage.save_categories()?;

        self.storage.log_delete(
            EntityType::Category,
            name,
            None,
            &CategoryRecord { name, budget },
        );

        Ok(true)
    }

    /// Registered categories in display order
    pub fn list(&self) -> Vec<CategoryBudget> {
        self.storage.state().categories.iter().cloned().collect()
    }

    /// Budget status for one category
    pub fn status(&self, name: &str) -> TrackerResult<BudgetStatus> {
        let state = self.storage.state();
        if !state.categories.contains(name) {
            return Err(TrackerError::category_not_found(name));
        }
        Ok(state.status(name, self.thresholds))
    }

    /// Budget status for every registered category, in registry order
    pub fn statuses(&self) -> Vec<BudgetStatus> {
        self.storage.state().statuses(self.thresholds)
    }

    /// Spend against categories no longer in the registry
    pub fn orphaned(&self) -> BTreeMap<String, Money> {
        self.storage.state().orphaned_spend()
    }
}

fn parse_budget(input: &str) -> TrackerResult<Money> {
    let budget = Money::parse(input)
        .map_err(|_| TrackerError::Validation(format!("Invalid budget: {}", input)))?;
    if budget.is_negative() {
        return Err(TrackerError::Validation(format!(
            "Budget cannot be negative: {}",
            input
        )));
    }
    Ok(budget)
}

fn budget_diff(before: Money, after: Money) -> String {
    format!("budget: {} -> {}", before, after)
}
