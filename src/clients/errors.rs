//! HTTP-specific error types for the Paddle Billing SDK.
//!
//! This module contains error types for transport failures, unstructured
//! error responses, and request validation failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: A non-2xx response whose body is not a Paddle
//!   error envelope. Structured rejections become
//!   [`ApiError`](crate::ApiError) instead.
//! - [`InvalidHttpRequestError`]: A request that fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use paddle_billing::{Error, HttpError};
//!
//! match client.products().get("pro_01", None).await {
//!     Ok(product) => println!("Found {}", product.name),
//!     Err(Error::Http(HttpError::Response(e))) => {
//!         println!("Unstructured failure {}: {}", e.code, e.body);
//!     }
//!     Err(Error::Http(HttpError::Network(e))) => println!("Network error: {e}"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a response has a non-2xx status and a body that is not
/// an error envelope.
///
/// The raw body is kept unchanged so that nothing about the original failure
/// is lost.
///
/// # Example
///
/// ```rust
/// use paddle_billing::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 502,
///     body: "Bad Gateway".to_string(),
///     request_id: None,
/// };
///
/// assert_eq!(error.to_string(), "HTTP 502: Bad Gateway");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// The request id, if the response carried one.
    pub request_id: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use paddle_billing::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET request was given a body.
    #[error("Cannot send data with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not accept a body.
        method: String,
    },

    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// An entity ID cannot be used as a path segment.
    #[error("Invalid entity ID {id:?}.")]
    InvalidId {
        /// The rejected ID.
        id: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response without an error envelope.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
