//! Operations accepted by [`PricesClient`](super::PricesClient).

use serde::Serialize;

use crate::entities::{
    CatalogType, CustomData, Duration, Money, PriceQuantity, Status, TaxMode, UnitPriceOverride,
};
use crate::json::Field;
use crate::resources::shared::{HasParameters, Pager, ParameterValue, Parameters};

crate::paddle_enum! {
    /// Related entities that can be included with prices.
    pub enum PriceIncludes {
        Product => "product",
    }
}

/// Filters and paging for listing prices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListPrices {
    /// Paging and ordering.
    pub pager: Pager,
    /// Related entities to include.
    pub includes: Vec<PriceIncludes>,
    /// Only return these price IDs.
    pub ids: Vec<String>,
    /// Only return prices for these products.
    pub product_ids: Vec<String>,
    /// Only return prices with these statuses.
    pub statuses: Vec<Status>,
    /// Only return recurring (`true`) or one-time (`false`) prices.
    pub recurring: Option<bool>,
    /// Only return prices of these types.
    pub types: Vec<CatalogType>,
}

impl HasParameters for ListPrices {
    fn get_parameters(&self) -> Parameters {
        let mut parameters = self.pager.get_parameters();
        parameters.push("include", ParameterValue::from_enums(&self.includes));
        parameters.push("id", ParameterValue::from_texts(&self.ids));
        parameters.push("product_id", ParameterValue::from_texts(&self.product_ids));
        parameters.push("status", ParameterValue::from_enums(&self.statuses));
        parameters.push_opt("recurring", self.recurring);
        parameters.push("type", ParameterValue::from_enums(&self.types));
        parameters
    }
}

/// Options for fetching a single price.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GetPrice {
    /// Related entities to include.
    pub includes: Vec<PriceIncludes>,
}

impl HasParameters for GetPrice {
    fn get_parameters(&self) -> Parameters {
        let mut parameters = Parameters::new();
        parameters.push("include", ParameterValue::from_enums(&self.includes));
        parameters
    }
}

/// Payload for creating a price.
///
/// # Example
///
/// ```rust
/// use paddle_billing::entities::{CurrencyCode, Duration, Interval, Money};
/// use paddle_billing::json::{Field, PayloadEncoder};
/// use paddle_billing::resources::CreatePrice;
/// use serde_json::json;
///
/// let operation = CreatePrice {
///     billing_cycle: Field::Set(Duration::new(Interval::Month, 1)),
///     ..CreatePrice::new(
///         "pro_01gsz4t5hdjse780zja8vvr7jg",
///         "Monthly (per seat)",
///         Money::new("500", CurrencyCode::USD),
///     )
/// };
///
/// assert_eq!(
///     PayloadEncoder::encode(&operation).unwrap(),
///     json!({
///         "product_id": "pro_01gsz4t5hdjse780zja8vvr7jg",
///         "description": "Monthly (per seat)",
///         "unit_price": {"amount": "500", "currency_code": "USD"},
///         "billing_cycle": {"interval": "month", "frequency": 1}
///     })
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreatePrice {
    /// ID of the product this price is for.
    pub product_id: String,
    /// Internal description.
    pub description: String,
    /// Base price per unit.
    pub unit_price: Money,
    /// Name shown to customers at checkout.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    /// Catalog or custom item.
    #[serde(rename = "type", skip_serializing_if = "Field::is_unset")]
    pub catalog_type: Field<CatalogType>,
    /// How often the price is charged. Unset or null for one-time prices.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub billing_cycle: Field<Duration>,
    /// Trial before the first charge.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub trial_period: Field<Duration>,
    /// How tax is calculated.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub tax_mode: Field<TaxMode>,
    /// Country-specific unit prices.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub unit_price_overrides: Field<Vec<UnitPriceOverride>>,
    /// Purchasable quantity limits.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub quantity: Field<PriceQuantity>,
    /// Caller-defined data.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub custom_data: Field<CustomData>,
}

impl CreatePrice {
    /// Creates a payload with the required fields set.
    #[must_use]
    pub fn new(
        product_id: impl Into<String>,
        description: impl Into<String>,
        unit_price: Money,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            description: description.into(),
            unit_price,
            name: Field::Unset,
            catalog_type: Field::Unset,
            billing_cycle: Field::Unset,
            trial_period: Field::Unset,
            tax_mode: Field::Unset,
            unit_price_overrides: Field::Unset,
            quantity: Field::Unset,
            custom_data: Field::Unset,
        }
    }
}

/// Payload for updating a price. Only set fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UpdatePrice {
    /// Internal description.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    /// Name shown to customers at checkout.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    /// Catalog or custom item.
    #[serde(rename = "type", skip_serializing_if = "Field::is_unset")]
    pub catalog_type: Field<CatalogType>,
    /// How often the price is charged.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub billing_cycle: Field<Duration>,
    /// Trial before the first charge.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub trial_period: Field<Duration>,
    /// How tax is calculated.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub tax_mode: Field<TaxMode>,
    /// Base price per unit.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub unit_price: Field<Money>,
    /// Country-specific unit prices.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub unit_price_overrides: Field<Vec<UnitPriceOverride>>,
    /// Purchasable quantity limits.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub quantity: Field<PriceQuantity>,
    /// Whether the price can be used in new transactions.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<Status>,
    /// Caller-defined data.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub custom_data: Field<CustomData>,
}

impl UpdatePrice {
    /// Returns the payload that archives a price.
    #[must_use]
    pub fn archive() -> Self {
        Self {
            status: Field::Set(Status::Archived),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CountryCode, CurrencyCode, Interval};
    use crate::json::PayloadEncoder;
    use serde_json::json;

    #[test]
    fn test_list_prices_parameters_in_order() {
        let operation = ListPrices {
            product_ids: vec!["pro_01".to_string()],
            recurring: Some(false),
            includes: vec![PriceIncludes::Product],
            ..ListPrices::default()
        };

        assert_eq!(
            operation.get_parameters().to_query(),
            vec![
                ("order_by".to_string(), "id[asc]".to_string()),
                ("per_page".to_string(), "50".to_string()),
                ("include".to_string(), "product".to_string()),
                ("product_id".to_string(), "pro_01".to_string()),
                ("recurring".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_update_price_clears_billing_cycle_with_null() {
        let operation = UpdatePrice {
            billing_cycle: Field::Null,
            unit_price_overrides: Field::Set(vec![UnitPriceOverride {
                country_codes: vec![CountryCode::DE, CountryCode::from_value("XX")],
                unit_price: Money::new("450", CurrencyCode::EUR),
            }]),
            trial_period: Field::Set(Duration::new(Interval::Day, 14)),
            ..UpdatePrice::default()
        };

        assert_eq!(
            PayloadEncoder::encode(&operation).unwrap(),
            json!({
                "billing_cycle": null,
                "trial_period": {"interval": "day", "frequency": 14},
                "unit_price_overrides": [{
                    "country_codes": ["DE", "XX"],
                    "unit_price": {"amount": "450", "currency_code": "EUR"}
                }]
            })
        );
    }

    #[test]
    fn test_archive_price_payload() {
        assert_eq!(
            PayloadEncoder::encode(&UpdatePrice::archive()).unwrap(),
            json!({"status": "archived"})
        );
    }
}
