//! Expense display formatting
//!
//! Renders the expense ledger as a register with a running total.

use crate::models::{Expense, Money};

/// Format a single expense as a register row
pub fn format_expense_row(expense: &Expense, symbol: &str) -> String {
    format!(
        "{:>14}  {} {}  {:12} {:>12}  {}",
        expense.id,
        expense.date.format("%Y-%m-%d"),
        expense.time.format("%H:%M"),
        truncate(&expense.category, 12),
        expense.amount.format_with_symbol(symbol),
        expense.note
    )
    .trim_end()
    .to_string()
}

/// Format expenses as a register, newest last
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>14}  {:16}  {:12} {:>12}  {}\n",
        "ID", "When", "Category", "Amount", "Note"
    ));
    output.push_str(&"-".repeat(66));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, symbol));
        output.push('\n');
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&"-".repeat(66));
    output.push('\n');
    output.push_str(&format!(
        "{} expense(s), total {}\n",
        expenses.len(),
        total.format_with_symbol(symbol)
    ));

    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
