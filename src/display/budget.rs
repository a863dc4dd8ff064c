//! Budget display formatting
//!
//! Renders per-category budget status with a text progress bar, and the
//! registry as a plain list.

use std::collections::BTreeMap;

use crate::config::settings::BAR_WIDTH_RANGE;
use crate::models::{BudgetLevel, BudgetStatus, CategoryBudget, Money};

/// Text progress bar `[#####.....]`, or blank padding when there is no ratio
pub fn progress_bar(status: &BudgetStatus, width: usize) -> String {
    let width = clamp_width(width);
    match status.fill_percent() {
        Some(percent) => {
            let filled = ((percent / 100.0) * width as f64).round() as usize;
            let filled = filled.min(width);
            format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
        }
        None => format!("[{}]", " ".repeat(width)),
    }
}

fn clamp_width(width: usize) -> usize {
    width.clamp(*BAR_WIDTH_RANGE.start(), *BAR_WIDTH_RANGE.end())
}

fn level_marker(level: BudgetLevel) -> &'static str {
    match level {
        BudgetLevel::Normal => "",
        BudgetLevel::Warning => " !",
        BudgetLevel::Critical => " !!",
        BudgetLevel::Undefined => "",
    }
}

/// Format the budget overview
pub fn format_budget_overview(
    statuses: &[BudgetStatus],
    orphaned: &BTreeMap<String, Money>,
    symbol: &str,
    bar_width: usize,
) -> String {
    let bar_width = clamp_width(bar_width);
    let mut output = String::new();

    if statuses.is_empty() {
        output.push_str("No categories defined.\n");
    } else {
        let name_width = statuses
            .iter()
            .map(|s| s.category.chars().count())
            .max()
            .unwrap_or(8)
            .max(8);

        output.push_str(&format!(
            "{:<nw$}  {:>12}  {:>12}  {:>12}  {}\n",
            "Category",
            "Budget",
            "Spent",
            "Remaining",
            "Progress",
            nw = name_width
        ));
        output.push_str(&"-".repeat(name_width + 44 + bar_width + 2));
        output.push('\n');

        for status in statuses {
            let percent = status
                .ratio
                .map(|r| format!(" {:>3.0}%", r * 100.0))
                .unwrap_or_default();

            output.push_str(&format!(
                "{:<nw$}  {:>12}  {:>12}  {:>12}  {}{} {}{}\n",
                status.category,
                status.budget.format_with_symbol(symbol),
                status.spent.format_with_symbol(symbol),
                status.remaining.format_with_symbol(symbol),
                progress_bar(status, bar_width),
                percent,
                status.level,
                level_marker(status.level),
                nw = name_width
            ));
        }

        let budget: Money = statuses.iter().map(|s| s.budget).sum();
        let spent: Money = statuses.iter().map(|s| s.spent).sum();
        output.push_str(&format!(
            "\nTotal: {} of {} spent, {} remaining\n",
            spent.format_with_symbol(symbol),
            budget.format_with_symbol(symbol),
            (budget - spent).format_with_symbol(symbol)
        ));
    }

    if !orphaned.is_empty() {
        output.push_str("\nSpend in removed categories:\n");
        for (category, amount) in orphaned {
            output.push_str(&format!(
                "  {}: {}\n",
                category,
                amount.format_with_symbol(symbol)
            ));
        }
    }

    output
}

/// Format the registry as a list of categories and limits
pub fn format_category_list(categories: &[CategoryBudget], symbol: &str) -> String {
    if categories.is_empty() {
        return "No categories defined.\n".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!("{:<width$}  {:>12}\n", "Category", "Budget", width = name_width));
    output.push_str(&format!("{:-<width$}  {:->12}\n", "", "", width = name_width));

    for category in categories {
        output.push_str(&format!(
            "{:<width$}  {:>12}\n",
            category.name,
            category.budget.format_with_symbol(symbol),
            width = name_width
        ));
    }

    output
}
