//! The async entry point to the Paddle API.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::config::PaddleConfig;
use crate::resources::{PricesClient, ProductsClient};

/// Async client for the Paddle Billing API.
///
/// Cloning a `Client` is cheap; clones share one connection pool.
///
/// # Example
///
/// ```rust
/// use paddle_billing::{ApiKey, Client, Environment, PaddleConfig};
///
/// let config = PaddleConfig::builder()
///     .api_key(ApiKey::new("pdl_sdbx_apikey_01").unwrap())
///     .environment(Environment::Sandbox)
///     .build()
///     .unwrap();
///
/// let client = Client::new(&config);
/// assert_eq!(client.http().base_url(), "https://sandbox-api.paddle.com");
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    http: Arc<HttpClient>,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a new client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created. See
    /// [`HttpClient::new`].
    #[must_use]
    pub fn new(config: &PaddleConfig) -> Self {
        Self {
            http: Arc::new(HttpClient::new(config)),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Returns the products resource client.
    #[must_use]
    pub const fn products(&self) -> ProductsClient<'_> {
        ProductsClient::new(&self.http)
    }

    /// Returns the prices resource client.
    #[must_use]
    pub const fn prices(&self) -> PricesClient<'_> {
        PricesClient::new(&self.http)
    }
}
