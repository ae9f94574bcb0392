//! Fixed-point monetary amount.
//!
//! Uses `rust_decimal` internally so that rental charges add up exactly,
//! without the rounding drift of binary floating point.

use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

/// A monetary amount owed for one or more rentals.
///
/// Displays as the shortest decimal that still carries at least one
/// fractional digit.
///
/// # Examples
///
/// ```
/// use rental_statement::Amount;
///
/// assert_eq!(Amount::from_tenths(20).to_string(), "2.0");
/// assert_eq!(Amount::from_tenths(15).to_string(), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Builds an amount from a whole number of tenths (`15` is `1.5`).
    pub fn from_tenths(tenths: i64) -> Self {
        Amount(Decimal::new(tenths, 1))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let normalized = self.0.normalize();
        if normalized.scale() == 0 {
            write!(f, "{}.0", normalized)
        } else {
            write!(f, "{}", normalized)
        }
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// Rate times a number of days.
impl Mul<u32> for Amount {
    type Output = Self;

    fn mul(self, days: u32) -> Self::Output {
        Amount(self.0 * Decimal::from(days))
    }
}
