//! Client for the `/prices` endpoints.

use std::sync::Arc;

use crate::clients::{HttpClient, HttpMethod};
use crate::entities::{Collection, Price};
use crate::error::Error;
use crate::resources::shared::HasParameters;

use super::operations::{CreatePrice, GetPrice, ListPrices, UpdatePrice};

/// Prices resource client.
///
/// Obtained from [`Client::prices`](crate::Client::prices).
#[derive(Clone, Copy, Debug)]
pub struct PricesClient<'a> {
    http: &'a Arc<HttpClient>,
}

impl<'a> PricesClient<'a> {
    pub(crate) const fn new(http: &'a Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists prices, one page at a time.
    ///
    /// `None` lists with [`ListPrices::default`].
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn list(&self, operation: Option<ListPrices>) -> Result<Collection<Price>, Error> {
        let operation = operation.unwrap_or_default();
        crate::resources::list(self.http, "prices", &operation.get_parameters()).await
    }

    /// Fetches a price by ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn get(&self, price_id: &str, operation: Option<GetPrice>) -> Result<Price, Error> {
        let operation = operation.unwrap_or_default();
        crate::resources::get(
            self.http,
            &crate::resources::entity_path("prices", price_id)?,
            &operation.get_parameters(),
        )
        .await
    }

    /// Creates a price.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the payload cannot be encoded or the request fails.
    pub async fn create(&self, operation: CreatePrice) -> Result<Price, Error> {
        crate::resources::send(self.http, HttpMethod::Post, "prices", &operation).await
    }

    /// Updates a price. Only fields set on `operation` are changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the payload cannot be encoded or the request fails.
    pub async fn update(&self, price_id: &str, operation: UpdatePrice) -> Result<Price, Error> {
        crate::resources::send(
            self.http,
            HttpMethod::Patch,
            &crate::resources::entity_path("prices", price_id)?,
            &operation,
        )
        .await
    }

    /// Archives a price.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn archive(&self, price_id: &str) -> Result<Price, Error> {
        self.update(price_id, UpdatePrice::archive()).await
    }
}
