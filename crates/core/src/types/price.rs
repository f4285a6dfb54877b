//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored as exact decimals so that `unit price × quantity` sums
//! never pick up binary floating point noise. On the wire (persisted cart,
//! page manifest) they are plain JSON/YAML numbers, written digit for digit
//! so a saved price reads back unchanged.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places shown for every formatted amount.
pub const DISPLAY_DECIMAL_PLACES: u32 = 1;

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// Unit prices cannot be below zero.
    #[error("price must not be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative unit price in the store currency.
///
/// ## Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use school_mart_core::Price;
///
/// let price = Price::new(Decimal::new(5, 1)).unwrap();
/// assert_eq!(price.display(), "ر.ع 0.5");
/// assert!(Price::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal);

impl Price {
    /// Create a price, rejecting negative amounts.
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

    /// The raw decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether this price satisfies the non-negative invariant.
    ///
    /// Values built through [`Price::new`] always do; values that arrive
    /// through deserialization are checked by the cart's `validate`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.0.is_sign_negative() || self.0.is_zero()
    }

    /// Format through the shared currency formatter (e.g. `ر.ع 0.5`).
    #[must_use]
    pub fn display(&self) -> String {
        format_amount(self.0)
    }

    /// Format the amount as-is, without fixing the decimal places
    /// (e.g. `ر.ع 2.25`).
    #[must_use]
    pub fn display_raw(&self) -> String {
        format!("{} {}", CurrencyCode::default().symbol(), self.0.normalize())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Format any amount with the store currency label and one decimal place.
///
/// Rounds half away from zero, which is how the storefront has always shown
/// amounts like `0.25`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(
        DISPLAY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    let mut fixed = rounded;
    fixed.rescale(DISPLAY_DECIMAL_PLACES);
    format!("{} {fixed}", CurrencyCode::default().symbol())
}

/// ISO 4217 currency codes the storefront knows how to label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// Omani rial.
    #[default]
    OMR,
}

impl CurrencyCode {
    /// The label printed in front of amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::OMR => "ر.ع",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_pads_to_one_place() {
        assert_eq!(format_amount(Decimal::ZERO), "ر.ع 0.0");
        assert_eq!(format_amount(Decimal::new(3, 0)), "ر.ع 3.0");
        assert_eq!(format_amount(Decimal::new(15, 1)), "ر.ع 1.5");
    }

    #[test]
    fn test_format_amount_rounds_half_away_from_zero() {
        assert_eq!(format_amount(Decimal::new(25, 2)), "ر.ع 0.3");
        assert_eq!(format_amount(Decimal::new(1249, 3)), "ر.ع 1.2");
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = Price::new(Decimal::new(-5, 1)).unwrap_err();
        assert_eq!(err, PriceError::Negative(Decimal::new(-5, 1)));
        assert!(Price::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_display_raw_keeps_precision() {
        let price = Price::new(Decimal::new(225, 2)).unwrap();
        assert_eq!(price.display_raw(), "ر.ع 2.25");
        assert_eq!(price.display(), "ر.ع 2.3");
    }

    #[test]
    fn test_price_is_json_number() {
        let price = Price::new(Decimal::new(5, 1)).unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "0.5");
        let back: Price = serde_json::from_str("0.5").unwrap();
        assert_eq!(back, price);
    }

    #[test]
    fn test_price_keeps_every_digit() {
        let price = Price::new(Decimal::new(1_234_567_890_123_456_789, 18)).unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "1.234567890123456789");
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back.amount(), price.amount());
    }

    #[test]
    fn test_price_reads_yaml_number() {
        let price: Price = serde_yaml::from_str("7.5").unwrap();
        assert_eq!(price.amount(), Decimal::new(75, 1));
    }

    #[test]
    fn test_currency_symbol() {
        assert_eq!(CurrencyCode::default().symbol(), "ر.ع");
    }
}
