//! Greedy change decomposition.
//!
//! For the coin set {25, 5, 1} every coin value divides the next larger
//! one, so taking as many of the largest coin as fit is always optimal.
//! Do not replace this with a minimal-coin search: callers depend on the
//! greedy ordering.

use changemaker_shared::types::{Amount, AmountError};
use rust_decimal::Decimal;
use serde::Serialize;

use super::denomination::Denomination;

/// A number of coins of one denomination. `count` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoinCount {
    /// How many coins.
    pub count: u64,
    /// Which coin.
    pub denomination: Denomination,
}

impl CoinCount {
    /// Combined value of these coins in cents.
    #[must_use]
    pub const fn value_cents(&self) -> u64 {
        self.count * self.denomination.value_cents()
    }
}

/// Coins making up an amount, highest denomination first.
///
/// Denominations that are not used do not appear, so the breakdown of
/// zero is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChangeBreakdown {
    entries: Vec<CoinCount>,
}

impl ChangeBreakdown {
    /// Entries in descending denomination order.
    #[must_use]
    pub fn entries(&self) -> &[CoinCount] {
        &self.entries
    }

    /// Returns true if no coins are needed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct denominations used.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total number of coins.
    #[must_use]
    pub fn coin_count(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// The amount these coins add up to.
    #[must_use]
    pub fn total(&self) -> Amount {
        Amount::from_cents(self.entries.iter().map(CoinCount::value_cents).sum())
    }

    /// Iterates entries in descending denomination order.
    pub fn iter(&self) -> std::slice::Iter<'_, CoinCount> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ChangeBreakdown {
    type Item = &'a CoinCount;
    type IntoIter = std::slice::Iter<'a, CoinCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for ChangeBreakdown {
    type Item = CoinCount;
    type IntoIter = std::vec::IntoIter<CoinCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Breaks `amount` into the fewest quarters, nickels and pennies.
///
/// # Example
///
/// ```
/// use changemaker_core::change::{Denomination, make_change};
/// use changemaker_shared::Amount;
///
/// let breakdown = make_change(Amount::from_cents(134));
/// let counts: Vec<_> = breakdown.iter().map(|c| (c.count, c.denomination)).collect();
/// assert_eq!(
///     counts,
///     vec![
///         (5, Denomination::Quarter),
///         (1, Denomination::Nickel),
///         (4, Denomination::Penny),
///     ]
/// );
/// ```
#[must_use]
pub fn make_change(amount: Amount) -> ChangeBreakdown {
    let mut remaining = amount.cents();
    let mut entries = Vec::with_capacity(Denomination::ALL.len());

    for denomination in Denomination::ALL {
        let value = denomination.value_cents();
        let count = remaining / value;
        if count > 0 {
            entries.push(CoinCount {
                count,
                denomination,
            });
            remaining -= count * value;
        }
    }

    // Pennies absorb everything.
    debug_assert_eq!(remaining, 0);

    ChangeBreakdown { entries }
}

/// Breaks a decimal dollar value into coins, e.g. `1.34` for $1.34.
///
/// The value is rounded to the nearest cent first.
pub fn change(amount: Decimal) -> Result<ChangeBreakdown, AmountError> {
    Amount::try_from(amount).map(make_change)
}
