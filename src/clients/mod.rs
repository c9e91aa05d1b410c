//! HTTP client types for Paddle API communication.
//!
//! This module provides the transport layer for making authenticated
//! requests to the Paddle API, and the [`Client`] entry point that hands out
//! resource clients.
//!
//! # Overview
//!
//! - [`Client`]: The async entry point (`client.products()`, `client.prices()`)
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A decoded response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//!
//! # Example
//!
//! ```rust,ignore
//! use paddle_billing::{ApiKey, Client, Environment, PaddleConfig};
//!
//! let config = PaddleConfig::builder()
//!     .api_key(ApiKey::new("pdl_sdbx_apikey_01").unwrap())
//!     .environment(Environment::Sandbox)
//!     .build()
//!     .unwrap();
//!
//! let client = Client::new(&config);
//! let products = client.products().list(None).await?;
//! ```
//!
//! # Error Mapping
//!
//! Non-2xx responses are never retried. A body carrying an error envelope
//! becomes [`ApiError`](crate::ApiError); anything else surfaces as
//! [`HttpError::Response`] with the raw body.

mod client;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use client::Client;
pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
