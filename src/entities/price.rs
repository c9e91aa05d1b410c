//! The price entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::product::Product;
use crate::entities::shared::{
    CatalogType, CustomData, Duration, ImportMeta, Money, PriceQuantity, Status, TaxMode,
    UnitPriceOverride,
};

/// How much and how often a product is charged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Paddle ID, prefixed `pri_`.
    pub id: String,
    /// ID of the product this price is for.
    pub product_id: String,
    /// Internal description, not shown to customers.
    pub description: String,
    /// Catalog or custom item.
    #[serde(rename = "type", default)]
    pub catalog_type: Option<CatalogType>,
    /// Name shown to customers at checkout.
    #[serde(default)]
    pub name: Option<String>,
    /// How often the price is charged. `None` for one-time prices.
    #[serde(default)]
    pub billing_cycle: Option<Duration>,
    /// Trial before the first charge, if any.
    #[serde(default)]
    pub trial_period: Option<Duration>,
    /// How tax is calculated.
    pub tax_mode: TaxMode,
    /// Base price per unit.
    pub unit_price: Money,
    /// Country-specific unit prices.
    #[serde(default)]
    pub unit_price_overrides: Vec<UnitPriceOverride>,
    /// Purchasable quantity limits.
    pub quantity: PriceQuantity,
    /// Whether the price can be used in new transactions.
    pub status: Status,
    /// Caller-defined data.
    #[serde(default)]
    pub custom_data: Option<CustomData>,
    /// Import information, for prices migrated from another platform.
    #[serde(default)]
    pub import_meta: Option<ImportMeta>,
    /// When the price was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the price was last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// The related product, when requested with `include=product`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Box<Product>>,
}

impl Price {
    /// Returns `true` if the price is charged on a billing cycle.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.billing_cycle.is_some()
    }
}
