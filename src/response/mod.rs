//! Response envelope parsing.
//!
//! Every Paddle response body is wrapped in an envelope:
//!
//! ```json
//! {"data": {...}, "meta": {"request_id": "...", "pagination": {...}}}
//! {"error": {...}, "meta": {"request_id": "..."}}
//! ```
//!
//! [`ResponseParser`] extracts the three sections. Extracting the error
//! section builds an [`ApiError`] but never returns it as a failure; that
//! decision belongs to the HTTP client, which only does so for non-2xx
//! responses.

mod api_error;

pub use api_error::{ApiError, ErrorType, FieldError};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a success response does not have the expected shape.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The response body is not valid JSON.
    #[error("Response body is not valid JSON: {source}")]
    InvalidBody {
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The envelope has no `data` section.
    #[error("Response envelope has no data section (request id: {})", .request_id.as_deref().unwrap_or("unknown"))]
    MissingData {
        /// The request id from the response `meta` section.
        request_id: Option<String>,
    },

    /// The `data` section does not match the expected type.
    #[error("Cannot decode response data as `{type_name}`: {source}")]
    UnexpectedData {
        /// The Rust type the data was decoded into.
        type_name: &'static str,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

/// Pagination metadata from `meta.pagination`.
///
/// # Example
///
/// ```rust
/// use paddle_billing::Pagination;
///
/// let exhausted = Pagination::exhausted();
/// assert!(!exhausted.has_next());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Page size of the request that produced this page.
    #[serde(default)]
    pub per_page: u32,
    /// Absolute URL of the next page.
    #[serde(default)]
    pub next: Option<String>,
    /// Whether the API reports more results after this page.
    #[serde(default)]
    pub has_more: bool,
    /// The API's estimate of the total number of results.
    #[serde(default)]
    pub estimated_total: Option<u64>,
}

impl Pagination {
    /// Returns metadata describing a walk with no further pages.
    #[must_use]
    pub const fn exhausted() -> Self {
        Self {
            per_page: 0,
            next: None,
            has_more: false,
            estimated_total: None,
        }
    }

    /// Returns `true` if another page can be fetched.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_more && self.next.is_some()
    }

    /// Returns the URL of the next page, if another page can be fetched.
    #[must_use]
    pub fn next_url(&self) -> Option<&str> {
        if self.has_more {
            self.next.as_deref()
        } else {
            None
        }
    }
}

/// Parser for one decoded response body.
///
/// # Example
///
/// ```rust
/// use paddle_billing::ResponseParser;
/// use serde_json::json;
///
/// let parser = ResponseParser::new(json!({
///     "data": [{"id": "pro_01"}],
///     "meta": {
///         "request_id": "req-1",
///         "pagination": {
///             "per_page": 1,
///             "next": "https://api.paddle.com/products?after=pro_01",
///             "has_more": true,
///             "estimated_total": 2
///         }
///     }
/// }));
///
/// assert!(parser.get_error().is_none());
/// assert_eq!(parser.get_data().unwrap()[0]["id"], "pro_01");
/// assert!(parser.get_pagination().has_next());
/// assert_eq!(parser.request_id(), Some("req-1"));
/// ```
#[derive(Clone, Debug)]
pub struct ResponseParser {
    body: serde_json::Value,
}

impl ResponseParser {
    /// Creates a parser for an already decoded body.
    #[must_use]
    pub const fn new(body: serde_json::Value) -> Self {
        Self { body }
    }

    /// Creates a parser by decoding response text.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::InvalidBody`] if the text is not JSON.
    pub fn from_text(text: &str) -> Result<Self, ResponseError> {
        serde_json::from_str(text)
            .map(Self::new)
            .map_err(|source| ResponseError::InvalidBody { source })
    }

    /// Returns the decoded body.
    #[must_use]
    pub const fn body(&self) -> &serde_json::Value {
        &self.body
    }

    /// Returns `meta.request_id`, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.body
            .get("meta")
            .and_then(|meta| meta.get("request_id"))
            .and_then(serde_json::Value::as_str)
    }

    /// Returns the `data` section.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::MissingData`] if the envelope has no `data`.
    pub fn get_data(&self) -> Result<&serde_json::Value, ResponseError> {
        self.body
            .get("data")
            .ok_or_else(|| ResponseError::MissingData {
                request_id: self.request_id().map(ToString::to_string),
            })
    }

    /// Decodes the `data` section into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::MissingData`] if the envelope has no `data`,
    /// or [`ResponseError::UnexpectedData`] if it does not decode as `T`.
    pub fn get_data_as<T: DeserializeOwned>(&self) -> Result<T, ResponseError> {
        T::deserialize(self.get_data()?).map_err(|source| ResponseError::UnexpectedData {
            type_name: std::any::type_name::<T>(),
            source,
        })
    }

    /// Returns `meta.pagination`, or [`Pagination::exhausted`] if absent.
    #[must_use]
    pub fn get_pagination(&self) -> Pagination {
        self.body
            .get("meta")
            .and_then(|meta| meta.get("pagination"))
            .and_then(|pagination| Pagination::deserialize(pagination).ok())
            .unwrap_or_else(Pagination::exhausted)
    }

    /// Builds the typed error from the `error` section.
    ///
    /// Returns `None` if there is no `error` section, or it lacks a string
    /// `type` and `code`.
    #[must_use]
    pub fn get_error(&self) -> Option<ApiError> {
        self.body
            .get("error")
            .and_then(|error| ApiError::from_envelope(error, self.request_id()))
    }
}
