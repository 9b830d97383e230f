//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations, amount-input validation and
//! formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::error::{TrackerError, TrackerResult};

/// Where the currency symbol goes when formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// `€12.50`
    Prefix,
    /// `12.50 €`
    #[default]
    Suffix,
}

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
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

    /// Addition that returns `None` instead of overflowing
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Addition clamped to the representable range
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Parse a non-negative amount entered by the user
    ///
    /// Accepts plain decimal literals such as `12`, `12.5`, `12.50`, `.5` or
    /// `12.`, with surrounding whitespace ignored. Rejects commas, signs,
    /// exponents, more than two fractional digits and anything that does not
    /// fit in cents.
    pub fn parse_amount(raw: &str) -> TrackerResult<Self> {
        let s = raw.trim();

        if s.is_empty() {
            return Err(TrackerError::invalid_amount(raw, "empty"));
        }
        if s.contains(',') {
            return Err(TrackerError::invalid_amount(
                raw,
                "comma is not a decimal separator",
            ));
        }
        if s.starts_with('-') {
            return Err(TrackerError::invalid_amount(raw, "must not be negative"));
        }

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) || (whole.is_empty() && frac.is_empty()) {
            return Err(TrackerError::invalid_amount(raw, "not a decimal number"));
        }
        if frac.len() > 2 {
            return Err(TrackerError::invalid_amount(
                raw,
                "more than two decimal places",
            ));
        }

        let too_large = || TrackerError::invalid_amount(raw, "too large");

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| too_large())?
        };
        let cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| too_large())? * 10,
            _ => frac.parse().map_err(|_| too_large())?,
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Self)
            .ok_or_else(too_large)
    }

    /// Check whether a raw input string is an acceptable amount
    ///
    /// Pure predicate: true exactly when [`Money::parse_amount`] succeeds.
    pub fn is_valid_amount(raw: &str) -> bool {
        Self::parse_amount(raw).is_ok()
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str, position: SymbolPosition) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        self.format_parts(sign, symbol, position)
    }

    /// Format with an explicit leading sign, e.g. `+12.50 €` or `-3.00 €`
    pub fn format_signed(&self, symbol: &str, position: SymbolPosition) -> String {
        let sign = if self.is_negative() { "-" } else { "+" };
        self.format_parts(sign, symbol, position)
    }

    fn format_parts(&self, sign: &str, symbol: &str, position: SymbolPosition) -> String {
        let digits = format!("{}.{:02}", self.units().abs(), self.cents_part());
        match position {
            SymbolPosition::Prefix => format!("{}{}{}", sign, symbol, digits),
            SymbolPosition::Suffix if symbol.is_empty() => format!("{}{}", sign, digits),
            SymbolPosition::Suffix => format!("{}{} {}", sign, digits, symbol),
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}
