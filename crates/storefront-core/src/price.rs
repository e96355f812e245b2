//! Price type for catalog entries and cart totals.
//!
//! Amounts are held in minor units (hundredths) as an unsigned integer so
//! totals are exact. The unit itself is currency-agnostic; the currency
//! symbol is a display concern supplied by configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use crate::error::StorefrontError;

/// Minor units per whole unit.
const MINOR_PER_UNIT: u64 = 100;

/// A non-negative price.
///
/// Serialized as a decimal number (`12.99`) so catalog files read naturally.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price {
    minor: u64,
}

impl Price {
    /// Zero.
    pub const ZERO: Price = Price { minor: 0 };

    /// Create a price from minor units.
    pub const fn from_minor(minor: u64) -> Self {
        Self { minor }
    }

    /// Create a price from whole units.
    pub const fn from_units(units: u64) -> Self {
        Self {
            minor: units.saturating_mul(MINOR_PER_UNIT),
        }
    }

    /// Create a price from a decimal amount.
    ///
    /// The amount must be a whole number of minor units. `1.004` is rejected
    /// rather than rounded, so two distinct catalog prices never collapse
    /// into one.
    ///
    /// ```
    /// use storefront_core::Price;
    /// let price = Price::from_decimal(49.99).unwrap();
    /// assert_eq!(price.minor(), 4999);
    /// assert!(Price::from_decimal(-1.0).is_err());
    /// assert!(Price::from_decimal(1.004).is_err());
    /// ```
    pub fn from_decimal(amount: f64) -> Result<Self, StorefrontError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(StorefrontError::InvalidPrice(amount));
        }
        let scaled = amount * MINOR_PER_UNIT as f64;
        let minor = scaled.round();
        // Decimal literals such as 49.99 scale to a few ulps off an integer.
        if (scaled - minor).abs() > 4.0 * f64::EPSILON * scaled.max(1.0) {
            return Err(StorefrontError::InvalidPrice(amount));
        }
        // `as` saturates for values beyond u64::MAX.
        Ok(Self {
            minor: minor as u64,
        })
    }

    /// Amount in minor units.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.minor as f64 / MINOR_PER_UNIT as f64
    }

    /// Add, saturating at the maximum representable price.
    pub fn saturating_add(self, other: Price) -> Price {
        Price::from_minor(self.minor.saturating_add(other.minor))
    }

    /// Multiply by a quantity, saturating. Non-positive quantities give zero.
    pub fn times(self, quantity: i64) -> Price {
        let quantity = u64::try_from(quantity).unwrap_or(0);
        Price::from_minor(self.minor.saturating_mul(quantity))
    }

    /// Format with a currency symbol (e.g., "$49.99").
    pub fn display(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.display_amount())
    }

    /// Format without a symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        format!(
            "{}.{:02}",
            self.minor / MINOR_PER_UNIT,
            self.minor % MINOR_PER_UNIT
        )
    }
}

impl TryFrom<f64> for Price {
    type Error = StorefrontError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Price::from_decimal(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> f64 {
        price.to_decimal()
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        self.saturating_add(other)
    }
}

impl Mul<i64> for Price {
    type Output = Price;

    fn mul(self, quantity: i64) -> Price {
        self.times(quantity)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Price::saturating_add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_amount())
    }
}
