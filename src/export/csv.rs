//! CSV export of the expense ledger
//!
//! One row per expense in ledger order under the header
//! `Date,Time,Amount,Category,Note`. Fields containing commas, quotes or
//! line breaks are quoted with embedded quotes doubled.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseLedger, Month};

/// Column headers, in output order
pub const CSV_HEADER: [&str; 5] = ["Date", "Time", "Amount", "Category", "Note"];

/// Default file name for a month's export, e.g. `expenses-2024-01.csv`
pub fn default_file_name(month: Month) -> String {
    format!("expenses-{}.csv", month)
}

/// Write the ledger as CSV
pub fn export_expenses_csv<W: Write>(ledger: &ExpenseLedger, writer: W) -> TrackerResult<()> {
    write_expenses_csv(ledger.as_slice(), writer)
}

/// Write any sequence of expenses as CSV
pub fn write_expenses_csv<'e, W: Write>(
    expenses: impl IntoIterator<Item = &'e Expense>,
    writer: W,
) -> TrackerResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER).map_err(export_error)?;

    for expense in expenses {
        let date = expense.date.format("%Y-%m-%d").to_string();
        let time = expense.time.format("%H:%M").to_string();
        let amount = expense.amount.to_string();

        csv_writer
            .write_record([
                date.as_str(),
                time.as_str(),
                amount.as_str(),
                expense.category.as_str(),
                expense.note.as_str(),
            ])
            .map_err(export_error)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render the ledger as a CSV string
pub fn expenses_to_csv(ledger: &ExpenseLedger) -> TrackerResult<String> {
    let mut buffer = Vec::new();
    export_expenses_csv(ledger, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| TrackerError::Export(e.to_string()))
}

fn export_error(err: csv::Error) -> TrackerError {
    TrackerError::Export(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, ExpenseId, Money};
    use chrono::{NaiveDate, NaiveTime};

    fn expense(id: u64, amount: Money, category: &str, note: &str) -> Expense {
        Expense::from_draft(
            ExpenseId::from_raw(id),
            ExpenseDraft::new(amount, category, note),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_single_expense() {
        let mut ledger = ExpenseLedger::new();
        ledger.push(expense(1, Money::from_units(100), "Food", ""));

        assert_eq!(
            expenses_to_csv(&ledger).unwrap(),
            "Date,Time,Amount,Category,Note\n2024-01-01,10:00,100,Food,\n"
        );
    }

    #[test]
    fn test_empty_ledger_writes_header_only() {
        assert_eq!(
            expenses_to_csv(&ExpenseLedger::new()).unwrap(),
            "Date,Time,Amount,Category,Note\n"
        );
    }

    #[test]
    fn test_amounts_without_trailing_zeros() {
        let mut ledger = ExpenseLedger::new();
        ledger.push(expense(1, Money::from_cents(1250), "Food", ""));
        ledger.push(expense(2, Money::from_cents(-300), "Food", ""));
        ledger.push(expense(3, Money::from_cents(199), "Food", ""));

        let csv = expenses_to_csv(&ledger).unwrap();
        let amounts: Vec<_> = csv
            .lines()
            .skip(1)
            .map(|line| line.split(',').nth(2).unwrap())
            .collect();
        assert_eq!(amounts, ["12.5", "-3", "1.99"]);
    }

    #[test]
    fn test_special_characters_are_quoted() {
        let mut ledger = ExpenseLedger::new();
        ledger.push(expense(1, Money::from_units(5), "Food, drink", "said \"hi\""));
        ledger.push(expense(2, Money::from_units(6), "Food", "two\nlines"));

        let csv = expenses_to_csv(&ledger).unwrap();
        assert_eq!(
            csv,
            "Date,Time,Amount,Category,Note\n\
             2024-01-01,10:00,5,\"Food, drink\",\"said \"\"hi\"\"\"\n\
             2024-01-01,10:00,6,Food,\"two\nlines\"\n"
        );
    }

    #[test]
    fn test_ledger_order_is_kept() {
        let mut ledger = ExpenseLedger::new();
        ledger.push(expense(9, Money::from_units(1), "Rent", "b"));
        ledger.push(expense(3, Money::from_units(2), "Food", "a"));

        let csv = expenses_to_csv(&ledger).unwrap();
        let notes: Vec<_> = csv.lines().skip(1).map(|l| l.rsplit(',').next().unwrap()).collect();
        assert_eq!(notes, ["b", "a"]);
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(
            default_file_name(Month::new(2024, 3).unwrap()),
            "expenses-2024-03.csv"
        );
    }
}
