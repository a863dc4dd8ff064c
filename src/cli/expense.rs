//! Expense CLI commands
//!
//! Handlers for `add`, `delete` and `list`.

use crate::config::settings::Settings;
use crate::display::expense::{format_expense_list, format_expense_row};
use crate::error::TrackerResult;
use crate::models::ExpenseId;
use crate::services::{AddExpenseInput, ExpenseService};
use crate::storage::Storage;

/// Record a new expense
pub fn handle_add(
    storage: &mut Storage,
    settings: &Settings,
    amount: String,
    category: Option<String>,
    note: Option<String>,
) -> TrackerResult<()> {
    let mut service = ExpenseService::new(storage);

    let input = AddExpenseInput {
        amount,
        category,
        note,
    };

    match service.add(input)? {
        Some(expense) => {
            println!("Added expense #{}", expense.id);
            println!("  {}", format_expense_row(&expense, &settings.currency_symbol));
        }
        None => println!("No amount given, nothing added."),
    }

    Ok(())
}

/// Delete an expense by id
pub fn handle_delete(storage: &mut Storage, settings: &Settings, id: ExpenseId) -> TrackerResult<()> {
    let mut service = ExpenseService::new(storage);

    match service.delete(id)? {
        Some(expense) => println!(
            "Deleted expense #{}: {} {}",
            expense.id,
            expense.amount.format_with_symbol(&settings.currency_symbol),
            expense.category
        ),
        None => println!("No expense with id {}.", id),
    }

    Ok(())
}

/// List all expenses in the current month
pub fn handle_list(storage: &mut Storage, settings: &Settings) -> TrackerResult<()> {
    let month = storage.state().month;
    let service = ExpenseService::new(storage);

    println!("Expenses for {}", month);
    println!();
    print!("{}", format_expense_list(service.list(), &settings.currency_symbol));

    Ok(())
}
