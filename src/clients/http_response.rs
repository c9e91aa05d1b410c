//! HTTP response types for the Paddle Billing SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing API
//! response data.

use std::collections::HashMap;

use crate::response::ResponseParser;

/// An HTTP response from the Paddle API.
///
/// Contains the status code, headers and decoded JSON body. Use
/// [`HttpResponse::into_parser`] to read the envelope sections.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns the request id.
    ///
    /// Reads the `meta.request_id` body field, falling back to the
    /// `Request-Id` / `X-Request-Id` headers.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.body
            .get("meta")
            .and_then(|meta| meta.get("request_id"))
            .and_then(serde_json::Value::as_str)
            .or_else(|| self.header("request-id"))
            .or_else(|| self.header("x-request-id"))
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Consumes the response, returning an envelope parser over its body.
    #[must_use]
    pub fn into_parser(self) -> ResponseParser {
        ResponseParser::new(self.body)
    }
}
