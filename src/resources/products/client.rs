//! Client for the `/products` endpoints.

use std::sync::Arc;

use crate::clients::{HttpClient, HttpMethod};
use crate::entities::{Collection, Product};
use crate::error::Error;
use crate::resources::shared::HasParameters;

use super::operations::{CreateProduct, GetProduct, ListProducts, UpdateProduct};

/// Products resource client.
///
/// Obtained from [`Client::products`](crate::Client::products).
///
/// # Example
///
/// ```rust,ignore
/// use paddle_billing::entities::TaxCategory;
/// use paddle_billing::resources::CreateProduct;
///
/// let product = client
///     .products()
///     .create(CreateProduct::new("AeroEdit Student", TaxCategory::Standard))
///     .await?;
///
/// let archived = client.products().archive(&product.id).await?;
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ProductsClient<'a> {
    http: &'a Arc<HttpClient>,
}

impl<'a> ProductsClient<'a> {
    pub(crate) const fn new(http: &'a Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists products, one page at a time.
    ///
    /// `None` lists with [`ListProducts::default`].
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn list(&self, operation: Option<ListProducts>) -> Result<Collection<Product>, Error> {
        let operation = operation.unwrap_or_default();
        crate::resources::list(self.http, "products", &operation.get_parameters()).await
    }

    /// Fetches a product by ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails, including
    /// [`Error::Api`] with code `not_found` for unknown IDs.
    pub async fn get(&self, product_id: &str, operation: Option<GetProduct>) -> Result<Product, Error> {
        let operation = operation.unwrap_or_default();
        crate::resources::get(
            self.http,
            &crate::resources::entity_path("products", product_id)?,
            &operation.get_parameters(),
        )
        .await
    }

    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the payload cannot be encoded or the request fails.
    pub async fn create(&self, operation: CreateProduct) -> Result<Product, Error> {
        crate::resources::send(self.http, HttpMethod::Post, "products", &operation).await
    }

    /// Updates a product. Only fields set on `operation` are changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the payload cannot be encoded or the request fails.
    pub async fn update(&self, product_id: &str, operation: UpdateProduct) -> Result<Product, Error> {
        crate::resources::send(
            self.http,
            HttpMethod::Patch,
            &crate::resources::entity_path("products", product_id)?,
            &operation,
        )
        .await
    }

    /// Archives a product.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn archive(&self, product_id: &str) -> Result<Product, Error> {
        self.update(product_id, UpdateProduct::archive()).await
    }
}
