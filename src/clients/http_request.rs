//! HTTP request types for the Paddle Billing SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Paddle API.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Paddle API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PATCH method for partially updating resources.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if requests with this method must carry a body.
    #[must_use]
    pub const fn requires_body(&self) -> bool {
        matches!(self, Self::Post | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An HTTP request to be sent to the Paddle API.
///
/// `path` is either relative to the configured base URL (`products`,
/// `prices/pri_01`) or an absolute URL, as returned by the API for the next
/// page of a list.
///
/// # Example
///
/// ```rust
/// use paddle_billing::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let list = HttpRequest::builder(HttpMethod::Get, "products")
///     .query_param("per_page", "50")
///     .build()
///     .unwrap();
/// assert_eq!(list.query, vec![("per_page".to_string(), "50".to_string())]);
///
/// let create = HttpRequest::builder(HttpMethod::Post, "products")
///     .body(json!({"name": "Analytics addon", "tax_category": "standard"}))
///     .build()
///     .unwrap();
/// assert!(create.body.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// Relative path or absolute URL.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters in the order they are sent.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` is empty
    /// - `http_method` is `Post` or `Patch` but `body` is `None`
    /// - `http_method` is `Get` but `body` is `Some`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim_matches('/').is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if self.http_method.requires_body() && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        if self.http_method == HttpMethod::Get && self.body.is_some() {
            return Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Patch.to_string(), "patch");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "products")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "products");
        assert!(request.body.is_none());
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_verify_requires_body_for_post_and_patch() {
        assert!(matches!(
            HttpRequest::builder(HttpMethod::Post, "products").build(),
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));
        assert!(matches!(
            HttpRequest::builder(HttpMethod::Patch, "products/pro_01").build(),
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "patch"
        ));
    }

    #[test]
    fn test_verify_rejects_body_on_get() {
        let result = HttpRequest::builder(HttpMethod::Get, "products")
            .body(json!({"name": "x"}))
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::UnexpectedBody { method }) if method == "get"
        ));
    }

    #[test]
    fn test_verify_rejects_empty_path() {
        assert!(matches!(
            HttpRequest::builder(HttpMethod::Get, "/").build(),
            Err(InvalidHttpRequestError::EmptyPath)
        ));
    }

    #[test]
    fn test_query_params_keep_insertion_order() {
        let request = HttpRequest::builder(HttpMethod::Get, "products")
            .query_param("order_by", "id[asc]")
            .query_param("per_page", "50")
            .build()
            .unwrap();

        assert_eq!(
            request.query,
            vec![
                ("order_by".to_string(), "id[asc]".to_string()),
                ("per_page".to_string(), "50".to_string()),
            ]
        );
    }
}
