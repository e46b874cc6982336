//! Money type for representing euro amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and parsing of user input.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of a euro)
///
/// Amounts may be negative. Because the value is an integer, it is always
/// finite, so totals derived from it can always be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Largest magnitude a single amount or a list total may have
    pub const MAX: Money = Money::from_euros(1_000_000_000);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use moneyfix::models::Money;
    /// let amount = Money::from_cents(1050); // 10,50 €
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole euros
    pub const fn from_euros(euros: i64) -> Self {
        Self(euros * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole euros portion (truncated toward zero)
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Whether the magnitude stays within [`Money::MAX`]
    pub const fn is_within_limit(&self) -> bool {
        self.0 >= -Self::MAX.0 && self.0 <= Self::MAX.0
    }

    /// Add, returning None if the result leaves the allowed range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .filter(Self::is_within_limit)
    }

    /// Subtract, returning None if the result leaves the allowed range
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .filter(Self::is_within_limit)
    }

    /// Sum amounts, returning None as soon as the running total leaves the
    /// allowed range
    pub fn checked_sum<I: IntoIterator<Item = Money>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |acc, amount| acc.checked_add(amount))
    }

    /// Round to whole euros, halves away from zero
    pub const fn round_to_euros(&self) -> i64 {
        let whole = self.0 / 100;
        let rest = self.0 % 100;
        if rest >= 50 {
            whole + 1
        } else if rest <= -50 {
            whole - 1
        } else {
            whole
        }
    }

    /// Convert to a floating point euro value (display and PDF layout only)
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "10", "10.5", "10,50", "-3", "12 €", "€12",
    /// "1.234,50", "1.500". A comma is always the decimal separator; dots are
    /// thousands separators unless a single dot is followed by one or two
    /// digits. More than two decimal places are rejected, as is anything
    /// beyond [`Money::MAX`].
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        // Handle negative sign at start
        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        // Remove currency symbol if present
        let rest = rest
            .trim_start_matches('€')
            .trim_end_matches('€')
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{a0}');

        let (whole, fraction) = split_decimal(rest).ok_or_else(invalid)?;
        let whole = strip_grouping(whole).ok_or_else(invalid)?;

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let euros: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| MoneyParseError::OutOfRange)?
        };

        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let total = euros
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or(MoneyParseError::OutOfRange)?;

        let amount = Self(if negative { -total } else { total });
        if !amount.is_within_limit() {
            return Err(MoneyParseError::OutOfRange);
        }
        Ok(amount)
    }
}

/// Split into integer part and decimal digits
fn split_decimal(s: &str) -> Option<(&str, &str)> {
    if let Some((whole, fraction)) = s.rsplit_once(',') {
        if whole.contains(',') {
            return None;
        }
        return Some((whole, fraction));
    }
    match s.rsplit_once('.') {
        Some((whole, fraction)) if fraction.len() <= 2 => Some((whole, fraction)),
        _ => Some((s, "")),
    }
}

/// Remove thousands dots ("1.234.567"), rejecting misplaced ones
fn strip_grouping(whole: &str) -> Option<String> {
    let mut groups = whole.split('.');
    let first = groups.next().unwrap_or_default();
    let mut digits = first.to_string();
    let mut grouped = false;
    for group in groups {
        if group.len() != 3 {
            return None;
        }
        digits.push_str(group);
        grouped = true;
    }
    if grouped && (first.is_empty() || first.len() > 3) {
        return None;
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(digits)
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{}{},{:02} €",
            sign,
            self.euros().abs(),
            self.cents_part()
        )
    }
}

// Settings files hold plain euro numbers ("amount": 4200.5)
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.cents_part() == 0 {
            serializer.serialize_i64(self.euros())
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let euros = f64::deserialize(deserializer)?;
        if !euros.is_finite() {
            return Err(serde::de::Error::custom("amount must be a finite number"));
        }
        if euros.abs() > Self::MAX.as_f64() {
            return Err(serde::de::Error::custom(format!(
                "amount {} exceeds the maximum of {} euros",
                euros,
                Self::MAX.euros()
            )));
        }
        Ok(Self((euros * 100.0).round() as i64))
    }
}

// Operators saturate instead of overflowing; amounts that must stay in range
// go through `checked_add`/`checked_sub`.
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
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
        *self = *self - other;
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
    /// Nothing was entered
    Empty,
    /// The input is not a number
    InvalidFormat(String),
    /// The amount is larger than [`Money::MAX`]
    OutOfRange,
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Betrag fehlt"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Ungültiger Betrag: {}", s),
            MoneyParseError::OutOfRange => write!(
                f,
                "Betrag zu groß (höchstens {} €)",
                Money::MAX.euros()
            ),
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
        assert_eq!(m.euros(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10,50 €");
        assert_eq!(Money::zero().to_string(), "0,00 €");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10,50 €");
        assert_eq!(Money::from_cents(-5).to_string(), "-0,05 €");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_euros(10);
        let b = Money::from_euros(5);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10,50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("12 €").unwrap().cents(), 1200);
        assert_eq!(Money::parse("€12").unwrap().cents(), 1200);
        assert_eq!(Money::parse("1.234,50").unwrap().cents(), 123450);
        assert_eq!(Money::parse("1.500").unwrap(), Money::from_euros(1500));
        assert_eq!(Money::parse("1.999").unwrap(), Money::from_euros(1999));
        assert_eq!(Money::parse("-2.000.000").unwrap(), Money::from_euros(-2_000_000));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Money::parse(""), Err(MoneyParseError::Empty));
        assert_eq!(Money::parse("   "), Err(MoneyParseError::Empty));
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("-").is_err());
        assert!(Money::parse("NaN").is_err());
        assert!(Money::parse("inf").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
        assert!(Money::parse("10,505").is_err());
        assert!(Money::parse("1,2,3").is_err());
        assert!(Money::parse("12.34.5").is_err());
        assert!(Money::parse("1234.567").is_err());
    }

    #[test]
    fn test_parse_rejects_amounts_beyond_max() {
        assert_eq!(
            Money::parse("90000000000000000"),
            Err(MoneyParseError::OutOfRange)
        );
        assert_eq!(
            Money::parse("1000000000,01"),
            Err(MoneyParseError::OutOfRange)
        );
        assert_eq!(Money::parse("1.000.000.000").unwrap(), Money::MAX);
        assert_eq!(Money::parse("-1000000000").unwrap(), -Money::MAX);
    }

    #[test]
    fn test_checked_arithmetic() {
        let big = Money::MAX;
        assert_eq!(big.checked_add(Money::from_cents(1)), None);
        assert_eq!((-big).checked_sub(Money::from_cents(1)), None);
        assert_eq!(
            big.checked_sub(Money::from_euros(1)),
            Some(Money::from_euros(999_999_999))
        );
        assert_eq!(Money::checked_sum([big, big]), None);
        assert_eq!(Money::checked_sum([big, -big]), Some(Money::zero()));
        assert_eq!(
            Money::checked_sum([Money::from_euros(2), Money::from_euros(3)]),
            Some(Money::from_euros(5))
        );
    }

    #[test]
    fn test_operators_saturate() {
        let huge = Money::from_cents(i64::MAX);
        assert_eq!(huge + huge, huge);
        assert_eq!(-huge - huge, Money::from_cents(i64::MIN));
    }

    #[test]
    fn test_round_to_euros() {
        assert_eq!(Money::from_cents(149).round_to_euros(), 1);
        assert_eq!(Money::from_cents(150).round_to_euros(), 2);
        assert_eq!(Money::from_cents(-150).round_to_euros(), -2);
        assert_eq!(Money::from_cents(-149).round_to_euros(), -1);
    }

    #[test]
    fn test_sum() {
        let amounts = [
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Money::from_euros(4200)).unwrap(), "4200");
        assert_eq!(serde_json::to_string(&Money::from_cents(1050)).unwrap(), "10.5");

        let parsed: Money = serde_json::from_str("10.5").unwrap();
        assert_eq!(parsed, Money::from_cents(1050));
        let parsed: Money = serde_json::from_str("-3").unwrap();
        assert_eq!(parsed, Money::from_euros(-3));

        assert!(serde_json::from_str::<Money>("1e17").is_err());
    }
}
