//! HTTP client for Paddle API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Paddle API and mapping error envelopes to [`ApiError`].

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::PaddleConfig;
use crate::error::Error;
use crate::response::{ApiError, ResponseError, ResponseParser};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Paddle API.
///
/// The client handles:
/// - URL construction from the configured environment or routing host
/// - Default headers: bearer authorization, `Paddle-Version`, JSON content
///   negotiation and User-Agent
/// - Mapping non-2xx responses to [`ApiError`] when the body is an error
///   envelope, and to [`HttpResponseError`] otherwise
///
/// No request is retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use paddle_billing::{ApiKey, PaddleConfig};
/// use paddle_billing::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = PaddleConfig::builder()
///     .api_key(ApiKey::new("pdl_sdbx_apikey_01").unwrap())
///     .build()
///     .unwrap();
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "products")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL, without a trailing slash.
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use paddle_billing::{ApiKey, Environment, PaddleConfig};
    /// use paddle_billing::clients::HttpClient;
    ///
    /// let config = PaddleConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .environment(Environment::Sandbox)
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// assert_eq!(client.base_url(), "https://sandbox-api.paddle.com");
    /// assert_eq!(client.default_headers().get("Paddle-Version").unwrap(), "1");
    /// ```
    #[must_use]
    pub fn new(config: &PaddleConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Paddle Billing Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Authorization".to_string(), config.api_key().bearer());
        default_headers.insert(
            "Paddle-Version".to_string(),
            config.api_version().to_string(),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().to_string(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Resolves a request path against the base URL.
    ///
    /// Absolute URLs are returned unchanged.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("https://") || path.starts_with("http://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    /// Sends an HTTP request to the Paddle API.
    ///
    /// On a 2xx status the decoded response is returned. On any other status
    /// the body is inspected: an error envelope becomes [`Error::Api`], and
    /// anything else is returned unchanged as [`HttpError::Response`].
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if:
    /// - Request validation fails (`Http(InvalidRequest)`)
    /// - Network error occurs (`Http(Network)`)
    /// - The API rejects the request with an error envelope (`Api`)
    /// - Non-2xx response without an envelope (`Http(Response)`)
    /// - A 2xx response body is not JSON (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        request.verify().map_err(HttpError::from)?;

        let url = self.url_for(&request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, url = %url, "Sending Paddle API request");

        let res = req_builder.send().await.map_err(HttpError::from)?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.map_err(HttpError::from)?;

        if (200..=299).contains(&code) {
            let body = if body_text.trim().is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text)
                    .map_err(|source| ResponseError::InvalidBody { source })?
            };
            return Ok(HttpResponse::new(code, res_headers, body));
        }

        Err(Self::error_for_status(code, res_headers, body_text))
    }

    /// Maps a non-2xx response to an error.
    fn error_for_status(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body_text: String,
    ) -> Error {
        let api_error: Option<ApiError> = ResponseParser::from_text(&body_text)
            .ok()
            .and_then(|parser| parser.get_error());

        if let Some(api_error) = api_error {
            tracing::warn!(
                status = code,
                error_type = %api_error.error_type,
                error_code = %api_error.error_code,
                request_id = api_error.request_id.as_deref().unwrap_or_default(),
                "Paddle API rejected the request: {}",
                api_error.detail
            );
            return Error::Api(api_error);
        }

        let response = HttpResponse::new(code, headers, serde_json::Value::Null);
        let request_id = response.request_id().map(String::from);
        tracing::debug!(status = code, "Non-2xx response without an error envelope");

        Error::Http(HttpError::Response(HttpResponseError {
            code,
            body: body_text,
            request_id,
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
