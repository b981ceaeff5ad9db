//! Money amount held as integer cents.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Decimal input is converted to whole cents once, at the boundary,
//! and every calculation after that is integer arithmetic.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use thiserror::Error;

/// Number of cents in one dollar.
pub const CENTS_PER_DOLLAR: u64 = 100;

/// Errors raised while building an [`Amount`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// A path or text component is not a plain non-negative integer.
    #[error("{field} must be a non-negative integer, got '{value}'")]
    NotAnInteger {
        /// Which component failed ("dollars" or "cents").
        field: &'static str,
        /// The rejected input.
        value: String,
    },

    /// The cents component does not fit in a single dollar.
    #[error("cents must be between 0 and 99, got {0}")]
    CentsOutOfRange(u64),

    /// Negative amounts cannot be made into change.
    #[error("amount must not be negative, got {0}")]
    Negative(Decimal),

    /// The amount does not fit in the cent counter.
    #[error("amount is too large")]
    Overflow,
}

/// A non-negative US dollar amount, exact to the cent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount {
    cents: u64,
}

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self { cents: 0 };

    /// Creates an amount from a raw number of cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Combines whole dollars and a cents component (`0..=99`).
    pub fn from_parts(dollars: u64, cents: u64) -> Result<Self, AmountError> {
        if cents >= CENTS_PER_DOLLAR {
            return Err(AmountError::CentsOutOfRange(cents));
        }

        dollars
            .checked_mul(CENTS_PER_DOLLAR)
            .and_then(|total| total.checked_add(cents))
            .map(Self::from_cents)
            .ok_or(AmountError::Overflow)
    }

    /// Parses dollars and cents given as text, e.g. `("1", "34")` or `("0", "00")`.
    ///
    /// Only ASCII digits are accepted; signs, whitespace and decimal points are rejected.
    pub fn parse_parts(dollars: &str, cents: &str) -> Result<Self, AmountError> {
        let dollars = parse_component("dollars", dollars)?;
        let cents = parse_component("cents", cents)?;
        Self::from_parts(dollars, cents)
    }

    /// Converts a decimal dollar value, rounding to the nearest cent.
    ///
    /// Midpoints (e.g. `0.005`) round away from zero.
    pub fn from_decimal(value: Decimal) -> Result<Self, AmountError> {
        if value < Decimal::ZERO {
            return Err(AmountError::Negative(value));
        }

        value
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|cents| cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|cents| cents.to_u64())
            .map(Self::from_cents)
            .ok_or(AmountError::Overflow)
    }

    /// Total value in cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.cents
    }

    /// Whole-dollar part.
    #[must_use]
    pub const fn dollars(self) -> u64 {
        self.cents / CENTS_PER_DOLLAR
    }

    /// Cents part below one dollar (`0..=99`).
    #[must_use]
    pub const fn cents_part(self) -> u64 {
        self.cents % CENTS_PER_DOLLAR
    }

    /// The amount as a decimal number of dollars with two decimal places.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.cents), 2)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.cents_part())
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

fn parse_component(field: &'static str, value: &str) -> Result<u64, AmountError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::NotAnInteger {
            field,
            value: value.to_string(),
        });
    }

    // All digits, so the only possible failure is overflow.
    value.parse().map_err(|_| AmountError::Overflow)
}
