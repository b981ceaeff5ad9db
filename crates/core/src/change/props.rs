//! Property-based tests for change decomposition.
//!
//! - Sum: coins always add back up to the amount
//! - Ordering: strictly descending denominations, no zero counts
//! - Minimality: greedy matches the exhaustive optimum for {25, 5, 1}
//! - Decimal entry point agrees with the integer-cent one

use proptest::prelude::*;
use rust_decimal::Decimal;

use changemaker_shared::types::Amount;

use super::breakdown::{change, make_change};

/// Strategy to generate amounts from $0.00 to $1,000,000.00 in cents.
fn any_cents() -> impl Strategy<Value = u64> {
    0u64..=100_000_000
}

/// Strategy to generate small amounts where exhaustive search is cheap.
fn small_cents() -> impl Strategy<Value = u64> {
    0u64..2_000
}

/// Fewest coins from {25, 5, 1} adding to `cents`, by trying every mix.
fn brute_force_min_coins(cents: u64) -> u64 {
    let mut best = u64::MAX;
    for quarters in 0..=cents / 25 {
        let after_quarters = cents - quarters * 25;
        for nickels in 0..=after_quarters / 5 {
            let pennies = after_quarters - nickels * 5;
            best = best.min(quarters + nickels + pennies);
        }
    }
    best
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* amount, the coins SHALL add up to exactly that amount.
    #[test]
    fn prop_breakdown_sums_to_amount(cents in any_cents()) {
        let breakdown = make_change(Amount::from_cents(cents));
        let sum: u64 = breakdown.iter().map(|c| c.count * c.denomination.value_cents()).sum();
        prop_assert_eq!(sum, cents);
        prop_assert_eq!(breakdown.total().cents(), cents);
    }

    /// *For any* amount, entries SHALL be strictly descending with positive counts.
    #[test]
    fn prop_breakdown_is_ordered_without_zero_counts(cents in any_cents()) {
        let breakdown = make_change(Amount::from_cents(cents));

        for entry in &breakdown {
            prop_assert!(entry.count > 0, "zero count for {}", entry.denomination);
        }
        for pair in breakdown.entries().windows(2) {
            prop_assert!(
                pair[0].denomination.value_cents() > pair[1].denomination.value_cents(),
                "{} listed before {}",
                pair[0].denomination,
                pair[1].denomination
            );
        }
    }

    /// *For any* amount, greedy SHALL use no more coins than the optimum.
    #[test]
    fn prop_breakdown_is_minimal(cents in small_cents()) {
        let breakdown = make_change(Amount::from_cents(cents));
        prop_assert_eq!(breakdown.coin_count(), brute_force_min_coins(cents));
    }

    /// *For any* amount, fewer than 5 pennies and fewer than 5 nickels are used.
    #[test]
    fn prop_small_coins_never_replaceable(cents in any_cents()) {
        let breakdown = make_change(Amount::from_cents(cents));
        for entry in &breakdown {
            let next_up = 25 / entry.denomination.value_cents();
            if next_up > 1 {
                prop_assert!(entry.count < 5, "{} {}s could be exchanged", entry.count, entry.denomination);
            }
        }
    }

    /// *For any* amount, the decimal form SHALL give the same coins as the cent form.
    #[test]
    fn prop_decimal_matches_cents(cents in any_cents()) {
        let decimal = Decimal::new(i64::try_from(cents).unwrap(), 2);
        prop_assert_eq!(change(decimal).unwrap(), make_change(Amount::from_cents(cents)));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_brute_force_reference() {
        assert_eq!(brute_force_min_coins(0), 0);
        assert_eq!(brute_force_min_coins(34), 6);
        assert_eq!(brute_force_min_coins(30), 2);
    }
}
