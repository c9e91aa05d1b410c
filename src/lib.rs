//! # Paddle Billing Rust SDK
//!
//! A typed client for the Paddle Billing REST API.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`PaddleConfig`] and [`PaddleConfigBuilder`]
//! - An async [`Client`] with resource clients for products and prices, and a
//!   [`blocking::Client`] for synchronous code
//! - Enumerations that accept values added to the API after this release
//!   (see [`enums`])
//! - Request payloads that distinguish an omitted field from an explicit
//!   `null` (see [`json::Field`])
//! - Forward-only pagination over list endpoints
//!   (see [`entities::Collection`])
//! - Typed API errors carrying the error code, detail and per-field
//!   validation messages (see [`ApiError`])
//! - Verification of signed webhook notifications (see [`notifications`])
//!
//! ## Quick Start
//!
//! ```rust
//! use paddle_billing::{ApiKey, Client, Environment, PaddleConfig};
//!
//! let config = PaddleConfig::builder()
//!     .api_key(ApiKey::new("pdl_sdbx_apikey_01h7zcgmdc").unwrap())
//!     .environment(Environment::Sandbox)
//!     .build()
//!     .unwrap();
//!
//! let client = Client::new(&config);
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use paddle_billing::entities::TaxCategory;
//! use paddle_billing::resources::{CreateProduct, ListProducts, Pager};
//!
//! let product = client
//!     .products()
//!     .create(CreateProduct::new("ChatApp Basic", TaxCategory::Standard))
//!     .await?;
//!
//! let page = client
//!     .products()
//!     .list(Some(ListProducts {
//!         pager: Pager::new().per_page(10),
//!         ..ListProducts::default()
//!     }))
//!     .await?;
//!
//! let everything = page.into_all().await?;
//! ```
//!
//! ## Handling Errors
//!
//! ```rust,ignore
//! use paddle_billing::Error;
//!
//! match client.products().get("pro_missing", None).await {
//!     Ok(product) => println!("{}", product.name),
//!     Err(Error::Api(error)) if error.error_code == "not_found" => {}
//!     Err(error) => return Err(error.into()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Clients and paginators are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No retries**: Each operation sends at most one request per page

pub mod blocking;
pub mod clients;
pub mod config;
pub mod entities;
pub mod enums;
pub mod error;
pub mod json;
pub mod notifications;
pub mod resources;
pub mod response;

// Re-export public types at crate root for convenience
pub use clients::Client;
pub use config::{ApiKey, Environment, PaddleConfig, PaddleConfigBuilder, DEFAULT_API_VERSION};
#[cfg(any(test, feature = "test-util"))]
#[doc(hidden)]
pub use config::HostUrl;
pub use error::{ConfigError, Error};

// Re-export error and response types
pub use clients::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use enums::{EnumValue, PaddleEnum};
pub use json::{EncodeError, Field, PayloadEncoder};
pub use response::{ApiError, ErrorType, FieldError, Pagination, ResponseError, ResponseParser};
