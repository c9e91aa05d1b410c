//! Operations accepted by [`ProductsClient`](super::ProductsClient).

use serde::Serialize;

use crate::entities::{CatalogType, CustomData, Status, TaxCategory};
use crate::json::Field;
use crate::resources::shared::{HasParameters, Pager, ParameterValue, Parameters};

crate::paddle_enum! {
    /// Related entities that can be included with products.
    pub enum ProductIncludes {
        Prices => "prices",
    }
}

/// Filters and paging for listing products.
///
/// The default lists every product ordered by ID ascending, 50 per page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListProducts {
    /// Paging and ordering.
    pub pager: Pager,
    /// Related entities to include.
    pub includes: Vec<ProductIncludes>,
    /// Only return these product IDs.
    pub ids: Vec<String>,
    /// Only return products of these types.
    pub types: Vec<CatalogType>,
    /// Only return products with these statuses.
    pub statuses: Vec<Status>,
    /// Only return products in these tax categories.
    pub tax_categories: Vec<TaxCategory>,
}

impl HasParameters for ListProducts {
    fn get_parameters(&self) -> Parameters {
        let mut parameters = self.pager.get_parameters();
        parameters.push("include", ParameterValue::from_enums(&self.includes));
        parameters.push("id", ParameterValue::from_texts(&self.ids));
        parameters.push("type", ParameterValue::from_enums(&self.types));
        parameters.push("status", ParameterValue::from_enums(&self.statuses));
        parameters.push(
            "tax_category",
            ParameterValue::from_enums(&self.tax_categories),
        );
        parameters
    }
}

/// Options for fetching a single product.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GetProduct {
    /// Related entities to include.
    pub includes: Vec<ProductIncludes>,
}

impl HasParameters for GetProduct {
    fn get_parameters(&self) -> Parameters {
        let mut parameters = Parameters::new();
        parameters.push("include", ParameterValue::from_enums(&self.includes));
        parameters
    }
}

/// Payload for creating a product.
///
/// # Example
///
/// ```rust
/// use paddle_billing::entities::TaxCategory;
/// use paddle_billing::json::{Field, PayloadEncoder};
/// use paddle_billing::resources::CreateProduct;
/// use serde_json::json;
///
/// let operation = CreateProduct {
///     description: Field::Set("Essential tools for student pilots".to_string()),
///     ..CreateProduct::new("AeroEdit Student", TaxCategory::Standard)
/// };
///
/// assert_eq!(
///     PayloadEncoder::encode(&operation).unwrap(),
///     json!({
///         "name": "AeroEdit Student",
///         "tax_category": "standard",
///         "description": "Essential tools for student pilots"
///     })
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateProduct {
    /// Name shown to customers.
    pub name: String,
    /// Tax category.
    pub tax_category: TaxCategory,
    /// Short description shown to customers.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    /// Catalog or custom item.
    #[serde(rename = "type", skip_serializing_if = "Field::is_unset")]
    pub catalog_type: Field<CatalogType>,
    /// Image shown at checkout.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub image_url: Field<String>,
    /// Caller-defined data.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub custom_data: Field<CustomData>,
}

impl CreateProduct {
    /// Creates a payload with the required fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, tax_category: TaxCategory) -> Self {
        Self {
            name: name.into(),
            tax_category,
            description: Field::Unset,
            catalog_type: Field::Unset,
            image_url: Field::Unset,
            custom_data: Field::Unset,
        }
    }
}

/// Payload for updating a product. Only set fields are sent.
///
/// # Example
///
/// ```rust
/// use paddle_billing::json::{Field, PayloadEncoder};
/// use paddle_billing::resources::UpdateProduct;
/// use serde_json::json;
///
/// let operation = UpdateProduct {
///     name: Field::Set("AeroEdit Pro".to_string()),
///     image_url: Field::Null,
///     ..UpdateProduct::default()
/// };
///
/// assert_eq!(
///     PayloadEncoder::encode(&operation).unwrap(),
///     json!({"name": "AeroEdit Pro", "image_url": null})
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UpdateProduct {
    /// Name shown to customers.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    /// Short description shown to customers.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    /// Catalog or custom item.
    #[serde(rename = "type", skip_serializing_if = "Field::is_unset")]
    pub catalog_type: Field<CatalogType>,
    /// Tax category.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub tax_category: Field<TaxCategory>,
    /// Image shown at checkout.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub image_url: Field<String>,
    /// Caller-defined data.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub custom_data: Field<CustomData>,
    /// Whether the product can be used in new transactions.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<Status>,
}

impl UpdateProduct {
    /// Returns the payload that archives a product.
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
    use crate::json::PayloadEncoder;
    use serde_json::json;

    #[test]
    fn test_default_list_sends_only_pager() {
        let query = ListProducts::default().get_parameters().to_query();
        assert_eq!(
            query,
            vec![
                ("order_by".to_string(), "id[asc]".to_string()),
                ("per_page".to_string(), "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_filters_are_comma_joined() {
        let operation = ListProducts {
            includes: vec![ProductIncludes::Prices],
            ids: vec!["pro_01".to_string(), "pro_02".to_string()],
            statuses: vec![Status::Active, Status::Archived],
            tax_categories: vec![TaxCategory::DigitalGoods],
            ..ListProducts::default()
        };

        let query = operation.get_parameters().to_query();

        assert!(query.contains(&("include".to_string(), "prices".to_string())));
        assert!(query.contains(&("id".to_string(), "pro_01,pro_02".to_string())));
        assert!(query.contains(&("status".to_string(), "active,archived".to_string())));
        assert!(query.contains(&("tax_category".to_string(), "digital-goods".to_string())));
        assert!(!query.iter().any(|(key, _)| key == "type"));
    }

    #[test]
    fn test_list_parameters_keep_enum_members() {
        let operation = ListProducts {
            types: vec![CatalogType::Custom],
            ..ListProducts::default()
        };

        let parameters = operation.get_parameters();
        let Some(ParameterValue::List(types)) = parameters.get("type") else {
            panic!("expected a list parameter");
        };
        assert!(matches!(&types[0], ParameterValue::Enum(value) if value.name() == "Custom"));
    }

    #[test]
    fn test_create_product_encodes_custom_data_verbatim() {
        let mut custom_data = CustomData::new();
        custom_data.insert("learnMoreURL", "https://www.example.com/aeroedit");

        let operation = CreateProduct {
            catalog_type: Field::Set(CatalogType::Standard),
            image_url: Field::Null,
            custom_data: Field::Set(custom_data),
            ..CreateProduct::new("AeroEdit", TaxCategory::Standard)
        };

        assert_eq!(
            PayloadEncoder::encode(&operation).unwrap(),
            json!({
                "name": "AeroEdit",
                "tax_category": "standard",
                "type": "standard",
                "image_url": null,
                "custom_data": {"learnMoreURL": "https://www.example.com/aeroedit"}
            })
        );
    }

    #[test]
    fn test_archive_sends_status_only() {
        assert_eq!(
            PayloadEncoder::encode(&UpdateProduct::archive()).unwrap(),
            json!({"status": "archived"})
        );
    }
}
