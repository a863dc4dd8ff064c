//! Expense record model
//!
//! An expense is immutable once recorded: it can only be removed, either
//! individually or by a month reset.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent (zero and negative values are allowed)
    pub amount: Money,

    /// Category name; not required to exist in the budget registry
    pub category: String,

    /// Calendar date the expense was recorded
    pub date: NaiveDate,

    /// Clock time the expense was recorded, minute precision
    #[serde(with = "clock_time")]
    pub time: NaiveTime,

    /// Free-text note
    #[serde(default, deserialize_with = "null_as_empty")]
    pub note: String,
}

/// User-supplied fields for a new expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub amount: Money,
    pub category: String,
    pub note: String,
}

impl ExpenseDraft {
    pub fn new(amount: Money, category: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
            note: note.into(),
        }
    }
}

impl Expense {
    /// Build a record from a draft, stamped with the given date and time
    pub fn from_draft(id: ExpenseId, draft: ExpenseDraft, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            id,
            amount: draft.amount,
            category: draft.category,
            date,
            time: truncate_to_minute(time),
            note: draft.note,
        }
    }

    pub fn has_note(&self) -> bool {
        !self.note.is_empty()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M"),
            self.category,
            self.amount
        )
    }
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serde helpers storing a clock time as `HH:MM`
///
/// Reading also accepts `HH:MM:SS` and 12-hour `hh:MM AM` forms.
pub mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";
    const ACCEPTED: [&str; 4] = ["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M:%S %p"];

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid time '{}'", s)))
    }

    /// Parse a clock time in any accepted format, dropping seconds
    pub fn parse(s: &str) -> Option<NaiveTime> {
        let s = s.trim();
        ACCEPTED
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
            .map(super::truncate_to_minute)
    }
}
