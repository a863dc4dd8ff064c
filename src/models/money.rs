//! Money type for representing currency amounts
//!
//! Internally stores amounts in hundredths (i64) to avoid floating-point
//! drift when summing. Persisted as a plain JSON number in major units
//! (`100`, `12.5`) so stored data stays readable.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Largest accepted magnitude, in hundredths (one trillion units)
///
/// Sums of up to ~92,000 amounts at this bound still fit in an `i64`.
pub const MAX_CENTS: i64 = 100_000_000_000_000;

/// Represents a monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fractional portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Wrap hundredths, rejecting amounts beyond [`MAX_CENTS`]
    pub fn checked_from_cents(cents: i64) -> Option<Self> {
        (cents.checked_abs()? <= MAX_CENTS).then_some(Self(cents))
    }

    /// Amount in major units as a float, for ratios
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "10", "10.5", "10.50", "-10.50", "+3", ".5", optionally
    /// prefixed by a currency symbol ("$10", "₹250"). More than two decimal
    /// places are rounded half away from zero. Magnitudes above
    /// [`MAX_CENTS`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());
        let out_of_range = || MoneyParseError::OutOfRange(input.to_string());

        let (negative, rest) = match input.chars().next() {
            Some('-') => (true, &input[1..]),
            Some('+') => (false, &input[1..]),
            _ => (false, input),
        };

        // Drop a leading currency symbol if present
        let rest = rest
            .trim_start_matches(|c: char| {
                !c.is_alphanumeric() && !c.is_whitespace() && !matches!(c, '.' | '-' | '+')
            })
            .trim();

        let (whole, frac) = match rest.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (rest, ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };

        let digits: Vec<i64> = frac.bytes().map(|b| (b - b'0') as i64).collect();
        let mut cents = digits.first().copied().unwrap_or(0) * 10 + digits.get(1).copied().unwrap_or(0);
        if digits.get(2).copied().unwrap_or(0) >= 5 {
            cents += 1;
        }

        let total = whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(out_of_range)?;

        Self::checked_from_cents(if negative { -total } else { total }).ok_or_else(out_of_range)
    }

    /// Format with a currency symbol: whole amounts without decimals,
    /// everything else with two
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        if self.cents_part() == 0 {
            format!("{}{}{}", sign, symbol, self.units().abs())
        } else {
            format!(
                "{}{}{}.{:02}",
                sign,
                symbol,
                self.units().abs(),
                self.cents_part()
            )
        }
    }
}

/// Plain numeric rendering without a currency symbol or trailing zero
/// decimals: `100`, `12.5`, `-0.05`
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let units = self.units().abs();
        match self.cents_part() {
            0 => write!(f, "{}{}", sign, units),
            c if c % 10 == 0 => write!(f, "{}{}.{}", sign, units, c / 10),
            c => write!(f, "{}{}.{:02}", sign, units, c),
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.cents_part() == 0 {
            serializer.serialize_i64(self.units())
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MoneyVisitor;

        impl<'de> Visitor<'de> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number or numeric string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
                v.checked_mul(100)
                    .and_then(Money::checked_from_cents)
                    .ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
                i64::try_from(v)
                    .map_err(|_| E::custom(format!("amount out of range: {}", v)))
                    .and_then(|v| self.visit_i64(v))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
                let cents = (v * 100.0).round();
                if !cents.is_finite() || cents.abs() > MAX_CENTS as f64 {
                    return Err(E::custom(format!("amount out of range: {}", v)));
                }
                Ok(Money(cents as i64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
                Money::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(MoneyVisitor)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display_is_plain_number() {
        assert_eq!(Money::from_units(100).to_string(), "100");
        assert_eq!(Money::from_cents(1250).to_string(), "12.5");
        assert_eq!(Money::from_cents(1205).to_string(), "12.05");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::zero().to_string(), "0");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_units(8000).format_with_symbol("₹"), "₹8000");
        assert_eq!(Money::from_cents(1050).format_with_symbol("$"), "$10.50");
        assert_eq!(Money::from_cents(-250).format_with_symbol("₹"), "-₹2.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("₹250").unwrap().cents(), 25000);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("+3").unwrap().cents(), 300);
        assert_eq!(Money::parse(" 10 ").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("0").unwrap().cents(), 0);
        assert_eq!(Money::parse("1.005").unwrap().cents(), 101);
        assert_eq!(Money::parse("1.004").unwrap().cents(), 100);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "abc", "abc5", "1.2.3", "12abc", "-", ".", "1,000", "1e3", "$-5"] {
            assert!(Money::parse(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Money::from_units(100)).unwrap(), "100");
        assert_eq!(serde_json::to_string(&Money::from_cents(1250)).unwrap(), "12.5");

        let m: Money = serde_json::from_str("8000").unwrap();
        assert_eq!(m, Money::from_units(8000));
        let m: Money = serde_json::from_str("12.5").unwrap();
        assert_eq!(m, Money::from_cents(1250));
        let m: Money = serde_json::from_str("-3").unwrap();
        assert_eq!(m, Money::from_units(-3));
        let m: Money = serde_json::from_str("0.1").unwrap();
        assert_eq!(m, Money::from_cents(10));
    }

    #[test]
    fn test_deserialize_numeric_string() {
        let m: Money = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(m, Money::from_units(42));
        assert!(serde_json::from_str::<Money>("\"NaN\"").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            Money::parse("1000000000000").unwrap(),
            Money::from_cents(MAX_CENTS)
        );
        assert_eq!(
            Money::parse("-1000000000000").unwrap(),
            Money::from_cents(-MAX_CENTS)
        );

        for big in ["1000000000000.01", "50000000000000000", "-50000000000000000", "99999999999999999999"] {
            assert_eq!(
                Money::parse(big),
                Err(MoneyParseError::OutOfRange(big.to_string())),
                "accepted {:?}",
                big
            );
        }
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Money>("50000000000000000").is_err());
        assert!(serde_json::from_str::<Money>("18446744073709551615").is_err());
        assert!(serde_json::from_str::<Money>("5e16").is_err());
        assert!(serde_json::from_str::<Money>("\"50000000000000000\"").is_err());
        assert!(serde_json::from_str::<Money>("1000000000000").is_ok());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max + Money::from_cents(1), max);
        assert_eq!(Money::from_cents(i64::MIN) - Money::from_cents(1), Money::from_cents(i64::MIN));
        assert_eq!(-Money::from_cents(i64::MIN), max);

        let mut total = max;
        total += max;
        assert_eq!(total, max);
    }
}
