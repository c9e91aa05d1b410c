//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Paddle API key.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ApiKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use paddle_billing::ApiKey;
///
/// let key = ApiKey::new("pdl_sdbx_apikey_01h7zcgmdc").unwrap();
/// assert_eq!(key.as_ref(), "pdl_sdbx_apikey_01h7zcgmdc");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }

    /// Returns the value of the `Authorization` header for this key.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated origin that replaces the environment URL in tests.
///
/// Set through `PaddleConfigBuilder::api_host` with the `test-util` feature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl(String);

#[cfg_attr(not(any(test, feature = "test-util")), allow(dead_code))]
impl HostUrl {
    /// Parses an `http` or `https` origin, dropping any trailing `/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL does not parse or
    /// has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        match reqwest::Url::parse(trimmed) {
            Ok(parsed) if parsed.has_host() && matches!(parsed.scheme(), "http" | "https") => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ConfigError::InvalidHostUrl { url }),
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
