//! The product entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::price::Price;
use crate::entities::shared::{CatalogType, CustomData, ImportMeta, Status, TaxCategory};

/// An item sold through Paddle.
///
/// # Example
///
/// ```rust
/// use paddle_billing::entities::{Product, Status, TaxCategory};
/// use serde_json::json;
///
/// let product: Product = serde_json::from_value(json!({
///     "id": "pro_01h7zcgmdc6tmwtjehp3sh7azf",
///     "name": "ChatApp Pro",
///     "tax_category": "standard",
///     "type": "standard",
///     "description": null,
///     "image_url": null,
///     "custom_data": null,
///     "status": "active",
///     "created_at": "2023-08-16T14:25:52.476Z",
///     "updated_at": "2023-08-16T14:25:52.476Z"
/// }))
/// .unwrap();
///
/// assert_eq!(product.tax_category, TaxCategory::Standard);
/// assert_eq!(product.status, Status::Active);
/// assert!(product.prices.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Paddle ID, prefixed `pro_`.
    pub id: String,
    /// Name shown to customers.
    pub name: String,
    /// Short description shown to customers.
    #[serde(default)]
    pub description: Option<String>,
    /// Catalog or custom item.
    #[serde(rename = "type", default)]
    pub catalog_type: Option<CatalogType>,
    /// Tax category, used to work out the tax rate.
    pub tax_category: TaxCategory,
    /// Image shown at checkout.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Caller-defined data.
    #[serde(default)]
    pub custom_data: Option<CustomData>,
    /// Whether the product can be used in new transactions.
    pub status: Status,
    /// Import information, for products migrated from another platform.
    #[serde(default)]
    pub import_meta: Option<ImportMeta>,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
    /// Prices for this product, when requested with `include=prices`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<Vec<Price>>,
}
