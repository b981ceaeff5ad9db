//! Coin change calculation.
//!
//! Breaks an amount into the fewest US coins drawn from quarters, nickels
//! and pennies. Dimes are not part of the coin set.

pub mod breakdown;
pub mod denomination;

#[cfg(test)]
mod props;

pub use breakdown::{ChangeBreakdown, CoinCount, change, make_change};
pub use denomination::Denomination;
