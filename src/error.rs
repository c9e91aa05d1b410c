//! Error types for the Paddle Billing SDK.
//!
//! This module contains the configuration error type and the crate-level
//! [`Error`] enum that every resource operation returns.
//!
//! # Error Handling
//!
//! Resource operations fail in one of four ways:
//!
//! - [`Error::Api`]: The API answered with a non-2xx status and a structured
//!   error envelope. The inner [`ApiError`] carries type, code, detail, docs URL
//!   and per-field validation errors.
//! - [`Error::Http`]: A transport-level failure (network error, or a non-2xx
//!   response whose body is not an error envelope).
//! - [`Error::Encode`]: A request payload could not be encoded. This is a
//!   programming error in the calling code, not something the API reported.
//! - [`Error::Response`]: A success response did not have the expected shape.
//!
//! # Example
//!
//! ```rust
//! use paddle_billing::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::json::EncodeError;
use crate::response::{ApiError, ResponseError};

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Paddle API key.")]
    EmptyApiKey,

    /// Webhook secret cannot be empty.
    #[error("Notification secret cannot be empty. Please provide the secret key of your notification destination.")]
    EmptySecret,

    /// API version must be a positive integer.
    #[error("Invalid API version '{version}'. Paddle API versions start at 1.")]
    InvalidApiVersion {
        /// The invalid version that was provided.
        version: u16,
    },

    /// The environment name is not one of the known environments.
    #[error("Invalid environment '{name}'. Expected 'production' or 'sandbox'.")]
    InvalidEnvironment {
        /// The invalid environment name that was provided.
        name: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'http://localhost:8080').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

/// Unified error type for resource operations.
///
/// Use pattern matching to tell a structured API rejection apart from a
/// transport failure:
///
/// ```rust,ignore
/// use paddle_billing::Error;
///
/// match client.products().create(operation).await {
///     Ok(product) => println!("Created {}", product.id),
///     Err(Error::Api(e)) => {
///         for field_error in &e.field_errors {
///             println!("{}: {}", field_error.field, field_error.error);
///         }
///     }
///     Err(e) => println!("Request failed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// The API rejected the request with a structured error envelope.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A transport-level failure.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The request payload could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// A success response did not match the expected envelope.
    #[error(transparent)]
    Response(#[from] ResponseError),
}

impl Error {
    /// Returns the typed API error, if this is one.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

// Verify Error is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
};
