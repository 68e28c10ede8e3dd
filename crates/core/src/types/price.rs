//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative listing price.
///
/// Backends send prices as JSON numbers or strings; both are accepted.
/// Prices serialize as decimal strings so that persisted carts round-trip
/// without floating-point drift.
///
/// ## Examples
///
/// ```
/// use herd_market_core::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::whole(50_000);
/// assert_eq!(price.line_total(3), Decimal::from(150_000));
///
/// assert!(Price::new(Decimal::from(-1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of currency units.
    #[must_use]
    pub fn whole(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price multiplied by a quantity.
    ///
    /// Saturates at [`Decimal::MAX`] instead of overflowing.
    #[must_use]
    pub fn line_total(&self, quantity: u32) -> Decimal {
        self.0
            .checked_mul(Decimal::from(quantity))
            .unwrap_or(Decimal::MAX)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_accepts_number_and_string() {
        let from_number: Price = serde_json::from_str("100000").unwrap();
        let from_string: Price = serde_json::from_str("\"100000\"").unwrap();
        assert_eq!(from_number, Price::whole(100_000));
        assert_eq!(from_string, Price::whole(100_000));
    }

    #[test]
    fn test_price_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-5").is_err());
        assert_eq!(
            Price::new(Decimal::from(-5)),
            Err(PriceError::Negative(Decimal::from(-5)))
        );
    }

    #[test]
    fn test_price_zero_is_valid() {
        assert_eq!(Price::new(Decimal::ZERO), Ok(Price::ZERO));
    }

    #[test]
    fn test_line_total() {
        assert_eq!(Price::whole(40_000).line_total(0), Decimal::ZERO);
        assert_eq!(
            Price::new(Decimal::new(1999, 2)).unwrap().line_total(2),
            Decimal::new(3998, 2)
        );
    }

    #[test]
    fn test_line_total_saturates() {
        let price = Price::new(Decimal::MAX).unwrap();
        assert_eq!(price.line_total(1), Decimal::MAX);
        assert_eq!(price.line_total(2), Decimal::MAX);
        assert_eq!(price.line_total(u32::MAX), Decimal::MAX);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::whole(250).to_string(), "250.00");
    }
}
