//! Budget registry: category name to monthly limit
//!
//! Categories keep their insertion order, which is the order they are shown
//! in and the first one is the default for new expenses. Persisted as a JSON
//! object `{ "Food": 8000, ... }`.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::money::Money;

/// Categories created on first run
pub const DEFAULT_CATEGORIES: [(&str, i64); 3] = [("Food", 8000), ("Rent", 15000), ("Transport", 3000)];

/// A category and its monthly budget limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBudget {
    pub name: String,
    pub budget: Money,
}

/// Ordered mapping from category name to budget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetRegistry {
    entries: Vec<CategoryBudget>,
}

impl BudgetRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The first-run defaults
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (name, units) in DEFAULT_CATEGORIES {
            registry.upsert(name, Money::from_units(units));
        }
        registry
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Budget for a category, if registered
    pub fn get(&self, name: &str) -> Option<Money> {
        self.position(name).map(|i| self.entries[i].budget)
    }

    /// First category in display order
    pub fn first(&self) -> Option<&CategoryBudget> {
        self.entries.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryBudget> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Insert a category or overwrite the budget of an existing one in place
    ///
    /// Returns the previous budget when the category already existed.
    pub fn upsert(&mut self, name: impl Into<String>, budget: Money) -> Option<Money> {
        let name = name.into();
        match self.position(&name) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].budget, budget)),
            None => {
                self.entries.push(CategoryBudget { name, budget });
                None
            }
        }
    }

    /// Overwrite the budget of an existing category
    ///
    /// Returns the previous budget, or None (and changes nothing) if the
    /// category is not registered.
    pub fn set_budget(&mut self, name: &str, budget: Money) -> Option<Money> {
        let i = self.position(name)?;
        Some(std::mem::replace(&mut self.entries[i].budget, budget))
    }

    /// Remove a category, returning its budget if it was registered
    pub fn remove(&mut self, name: &str) -> Option<Money> {
        let i = self.position(name)?;
        Some(self.entries.remove(i).budget)
    }

    /// Sum of all budgets
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.budget).sum()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }
}

impl Serialize for BudgetRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.budget)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for BudgetRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RegistryVisitor;

        impl<'de> Visitor<'de> for RegistryVisitor {
            type Value = BudgetRegistry;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category names to budgets")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut registry = BudgetRegistry::new();
                while let Some((name, budget)) = access.next_entry::<String, Money>()? {
                    registry.upsert(name, budget);
                }
                Ok(registry)
            }
        }

        deserializer.deserialize_map(RegistryVisitor)
    }
}
