//! Monetary amounts.

use serde::{Deserialize, Serialize};

use super::{CountryCode, CurrencyCode};

/// An amount of money in a currency.
///
/// `amount` is a string of the lowest denomination (cents for USD), as
/// Paddle sends and expects it.
///
/// # Example
///
/// ```rust
/// use paddle_billing::entities::{CurrencyCode, Money};
///
/// let price = Money::new("1999", CurrencyCode::USD);
/// assert_eq!(
///     serde_json::to_string(&price).unwrap(),
///     r#"{"amount":"1999","currency_code":"USD"}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the lowest denomination of the currency.
    pub amount: String,
    /// Currency of the amount.
    pub currency_code: CurrencyCode,
}

impl Money {
    /// Creates a new amount.
    #[must_use]
    pub fn new(amount: impl Into<String>, currency_code: CurrencyCode) -> Self {
        Self {
            amount: amount.into(),
            currency_code,
        }
    }
}

/// A price that replaces the base unit price for customers in some countries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPriceOverride {
    /// Countries this override applies to.
    pub country_codes: Vec<CountryCode>,
    /// The unit price charged in those countries.
    pub unit_price: Money,
}
