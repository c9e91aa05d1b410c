//! A blocking client for code that does not run an async runtime.
//!
//! [`Client`] owns a current-thread Tokio runtime and drives the async
//! [`crate::Client`] on it. Each call blocks the calling thread until the
//! response has been decoded.
//!
//! Do not use this client from inside an async runtime; blocking on a
//! runtime from within another one panics.
//!
//! # Example
//!
//! ```rust,no_run
//! use paddle_billing::blocking::Client;
//! use paddle_billing::{ApiKey, Environment, PaddleConfig};
//!
//! let config = PaddleConfig::builder()
//!     .api_key(ApiKey::new("pdl_sdbx_apikey_01").unwrap())
//!     .environment(Environment::Sandbox)
//!     .build()
//!     .unwrap();
//! let client = Client::new(&config).unwrap();
//!
//! let page = client.products().list(None).unwrap();
//! let mut paginator = page.paginator().clone();
//! while let Some(page) = client.fetch_next(&mut paginator).unwrap() {
//!     println!("{} more products", page.len());
//! }
//! ```

use std::io;

use serde::de::DeserializeOwned;
use tokio::runtime::{Builder, Runtime};

use crate::config::PaddleConfig;
use crate::entities::{Collection, Paginator, Price, Product};
use crate::error::Error;
use crate::resources::{
    CreatePrice, CreateProduct, GetPrice, GetProduct, ListPrices, ListProducts, UpdatePrice,
    UpdateProduct,
};

/// Blocking client for the Paddle Billing API.
#[derive(Debug)]
pub struct Client {
    runtime: Runtime,
    inner: crate::Client,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a blocking client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the runtime cannot be started.
    pub fn new(config: &PaddleConfig) -> io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let inner = {
            let _guard = runtime.enter();
            crate::Client::new(config)
        };
        Ok(Self { runtime, inner })
    }

    /// Returns the async client this client drives.
    #[must_use]
    pub const fn async_client(&self) -> &crate::Client {
        &self.inner
    }

    /// Returns the blocking products resource client.
    #[must_use]
    pub const fn products(&self) -> ProductsClient<'_> {
        ProductsClient { client: self }
    }

    /// Returns the blocking prices resource client.
    #[must_use]
    pub const fn prices(&self) -> PricesClient<'_> {
        PricesClient { client: self }
    }

    /// Fetches the next page of `paginator`, advancing it on success.
    ///
    /// Returns `Ok(None)` without sending a request once the walk is
    /// exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails. The paginator is not moved.
    pub fn fetch_next<T: DeserializeOwned>(
        &self,
        paginator: &mut Paginator<T>,
    ) -> Result<Option<Collection<T>>, Error> {
        self.runtime.block_on(paginator.fetch_next())
    }

    /// Fetches every page after `collection` and returns all entities.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if any page request fails.
    pub fn all<T: DeserializeOwned>(&self, collection: Collection<T>) -> Result<Vec<T>, Error> {
        self.runtime.block_on(collection.into_all())
    }
}

/// Blocking facade over [`crate::resources::ProductsClient`].
#[derive(Clone, Copy, Debug)]
pub struct ProductsClient<'a> {
    client: &'a Client,
}

impl ProductsClient<'_> {
    /// Lists products.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub fn list(&self, operation: Option<ListProducts>) -> Result<Collection<Product>, Error> {
        let client = self.client;
        client.runtime.block_on(client.inner.products().list(operation))
    }

    /// Fetches a product by ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub fn get(&self, product_id: &str, operation: Option<GetProduct>) -> Result<Product, Error> {
        let client = self.client;
        client
            .runtime
            .block_on(client.inner.products().get(product_id, operation))
    }

    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub fn create(&self, operation: CreateProduct) -> Result<Product, Error> {
        let client = self.client;
        client
            .runtime
            .block_on(client.inner.products().create(operation))
    }

    /// Updates a product.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub fn update(&self, product_id: &str, operation: UpdateProduct) -> Result<Product, Error> {
        let client = self.client;
        client
            .runtime
            .block_on(client.inner.products().update(product_id, operation))
    }

    /// Archives a product.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub fn archive(&self, product_id: &str) -> Result<Product, Error> {
        let client = self.client;
        client
            .runtime
            .block_on(client.inner.products().archive(product_id))
    }
}

/// Blocking facade over [`crate::resources::PricesClient`].
#[derive(Clone, Copy, Debug)]
pub struct PricesClient<'a> {
    client: &'a Client,
}

impl PricesClient<'_> {
    /// Lists prices.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub fn list(&self, operation: Option<ListPrices>) -> Result<Collection<Price>, Error> {
        let client = self.client;
        client.runtime.block_on(client.inner.prices().list(operation))
    }

    /// Fetches a price by ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub fn get(&self, price_id: &str, operation: Option<GetPrice>) -> Result<Price, Error> {
        let client = self.client;
        client
            .runtime
            .block_on(client.inner.prices().get(price_id, operation))
    }

    /// Creates a price.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub fn create(&self, operation: CreatePrice) -> Result<Price, Error> {
        let client = self.client;
        client.runtime.block_on(client.inner.prices().create(operation))
    }

    /// Updates a price.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub fn update(&self, price_id: &str, operation: UpdatePrice) -> Result<Price, Error> {
        let client = self.client;
        client
            .runtime
            .block_on(client.inner.prices().update(price_id, operation))
    }

    /// Archives a price.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub fn archive(&self, price_id: &str) -> Result<Price, Error> {
        let client = self.client;
        client.runtime.block_on(client.inner.prices().archive(price_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, Environment};
    use crate::entities::Product;
    use crate::response::Pagination;

    fn client() -> Client {
        let config = PaddleConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .environment(Environment::Sandbox)
            .build()
            .unwrap();
        Client::new(&config).unwrap()
    }

    #[test]
    fn test_blocking_client_wraps_async_client() {
        let client = client();
        assert_eq!(
            client.async_client().http().base_url(),
            "https://sandbox-api.paddle.com"
        );
    }

    #[test]
    fn test_fetch_next_on_exhausted_paginator() {
        let client = client();
        let http = std::sync::Arc::new(client.async_client().http().clone());
        let mut paginator: Paginator<Product> = Paginator::new(http, Pagination::exhausted());

        assert!(client.fetch_next(&mut paginator).unwrap().is_none());
    }
}
