//! Derived budget status for a category
//!
//! Nothing here is stored; statuses are computed from the registry and the
//! ledger whenever they are displayed.

use serde::Serialize;
use std::fmt;

use super::money::Money;

/// Ratio thresholds for the warning bands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub warning: f64,
    pub critical: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning: 0.75,
            critical: 0.9,
        }
    }
}

/// How close a category is to its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Normal,
    Warning,
    Critical,
    /// Budget is zero, so no ratio can be computed
    Undefined,
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "ok"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
            Self::Undefined => write!(f, "n/a"),
        }
    }
}

/// Budget, spend and remaining amount for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub category: String,
    pub budget: Money,
    pub spent: Money,
    /// `budget - spent`; negative when over budget
    pub remaining: Money,
    /// `spent / budget`, None for a zero budget
    pub ratio: Option<f64>,
    pub level: BudgetLevel,
}

impl BudgetStatus {
    pub fn compute(
        category: impl Into<String>,
        budget: Money,
        spent: Money,
        thresholds: Thresholds,
    ) -> Self {
        let ratio = if budget.is_zero() {
            None
        } else {
            Some(spent.as_f64() / budget.as_f64())
        };

        let level = match ratio {
            None => BudgetLevel::Undefined,
            Some(r) if r > thresholds.critical => BudgetLevel::Critical,
            Some(r) if r > thresholds.warning => BudgetLevel::Warning,
            Some(_) => BudgetLevel::Normal,
        };

        Self {
            category: category.into(),
            budget,
            spent,
            remaining: budget - spent,
            ratio,
            level,
        }
    }

    /// Progress bar fill in percent, clamped to 0..=100
    pub fn fill_percent(&self) -> Option<f64> {
        self.ratio.map(|r| (r * 100.0).clamp(0.0, 100.0))
    }
}
