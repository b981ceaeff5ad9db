//! US coin denominations used for change.

use serde::Serialize;

/// A coin that change can be made from.
///
/// Declared from highest to lowest value; `Ord` follows declaration order,
/// so sorting puts the largest coin first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Denomination {
    /// 25 cents
    Quarter,
    /// 5 cents
    Nickel,
    /// 1 cent
    Penny,
}

impl Denomination {
    /// Every denomination, highest value first.
    pub const ALL: [Self; 3] = [Self::Quarter, Self::Nickel, Self::Penny];

    /// Face value in cents.
    #[must_use]
    pub const fn value_cents(self) -> u64 {
        match self {
            Self::Quarter => 25,
            Self::Nickel => 5,
            Self::Penny => 1,
        }
    }

    /// Singular coin name, e.g. "quarter".
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Quarter => "quarter",
            Self::Nickel => "nickel",
            Self::Penny => "penny",
        }
    }

    /// Plural coin name, e.g. "pennies".
    #[must_use]
    pub const fn plural_name(self) -> &'static str {
        match self {
            Self::Quarter => "quarters",
            Self::Nickel => "nickels",
            Self::Penny => "pennies",
        }
    }
}

impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
