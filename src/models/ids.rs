//! Expense identifiers
//!
//! Expense ids are integers derived from the creation timestamp in
//! milliseconds, which keeps them compatible with data written by earlier
//! versions of the tracker. A newtype keeps them from being mixed up with
//! other integers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier of an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// Wrap a raw id value
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id value
    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// Generate an id from a millisecond timestamp that is strictly greater
    /// than `latest`, so ids stay unique when several expenses are created
    /// within the same millisecond.
    pub fn generate(timestamp_millis: i64, latest: Option<ExpenseId>) -> Self {
        let candidate = u64::try_from(timestamp_millis).unwrap_or(0);
        match latest {
            Some(ExpenseId(last)) if candidate <= last => Self(last + 1),
            _ => Self(candidate),
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ExpenseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}
