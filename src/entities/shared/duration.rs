//! Billing periods and purchasable quantities.

use serde::{Deserialize, Serialize};

use super::Interval;

/// A span of time, such as a billing cycle or a trial period.
///
/// # Example
///
/// ```rust
/// use paddle_billing::entities::{Duration, Interval};
///
/// let yearly = Duration::new(Interval::Year, 1);
/// assert_eq!(
///     serde_json::to_string(&yearly).unwrap(),
///     r#"{"interval":"year","frequency":1}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duration {
    /// Unit of time.
    pub interval: Interval,
    /// Number of units.
    pub frequency: u32,
}

impl Duration {
    /// Creates a new duration.
    #[must_use]
    pub const fn new(interval: Interval, frequency: u32) -> Self {
        Self {
            interval,
            frequency,
        }
    }
}

/// Limits on how many units of a price can be bought in one checkout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuantity {
    /// Minimum quantity.
    pub minimum: u32,
    /// Maximum quantity.
    pub maximum: u32,
}

impl Default for PriceQuantity {
    fn default() -> Self {
        Self {
            minimum: 1,
            maximum: 100,
        }
    }
}
