//! Configuration types for the Paddle Billing SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with Paddle.
//!
//! # Overview
//!
//! - [`PaddleConfig`]: The main configuration struct holding all SDK settings
//! - [`PaddleConfigBuilder`]: A builder for constructing [`PaddleConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`Environment`]: The named Paddle environment to talk to
//!
//! The base URL always comes from the [`Environment`]. Tests built with the
//! `test-util` feature can route requests to a local mock server instead.
//!
//! # Example
//!
//! ```rust
//! use paddle_billing::{ApiKey, Environment, PaddleConfig};
//!
//! let config = PaddleConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .environment(Environment::Sandbox)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://sandbox-api.paddle.com");
//! ```

mod environment;
mod newtypes;

pub use environment::Environment;
pub use newtypes::ApiKey;
#[cfg(any(test, feature = "test-util"))]
#[doc(hidden)]
pub use newtypes::HostUrl;
#[cfg(not(any(test, feature = "test-util")))]
use newtypes::HostUrl;

use std::time::Duration;

use crate::error::ConfigError;

/// The default `Paddle-Version` header value.
pub const DEFAULT_API_VERSION: u16 = 1;

/// Configuration for the Paddle Billing SDK.
///
/// Holds the API key, the target environment and transport settings. The
/// configuration is fixed once built; every request made through a client
/// created from it carries the same authorization and version headers.
///
/// # Thread Safety
///
/// `PaddleConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct PaddleConfig {
    api_key: ApiKey,
    environment: Environment,
    api_version: u16,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl PaddleConfig {
    /// Creates a new builder for constructing a `PaddleConfig`.
    #[must_use]
    pub fn builder() -> PaddleConfigBuilder {
        PaddleConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the value sent in the `Paddle-Version` header.
    #[must_use]
    pub const fn api_version(&self) -> u16 {
        self.api_version
    }

    /// Returns the mock server host, if one was set.
    #[cfg(any(test, feature = "test-util"))]
    #[doc(hidden)]
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the URL requests are sent to: the base URL of the environment.
    #[must_use]
    pub fn base_url(&self) -> &str {
        match &self.api_host {
            Some(host) => host.as_ref(),
            None => self.environment.base_url(),
        }
    }
}

// Verify PaddleConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PaddleConfig>();
};

/// Builder for constructing [`PaddleConfig`] instances.
///
/// The only required field is `api_key`.
///
/// # Defaults
///
/// - `environment`: [`Environment::Production`]
/// - `api_version`: [`DEFAULT_API_VERSION`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (the HTTP client default)
///
/// # Example
///
/// ```rust
/// use paddle_billing::{ApiKey, Environment, PaddleConfig};
/// use std::time::Duration;
///
/// let config = PaddleConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .environment(Environment::Sandbox)
///     .api_version(1)
///     .user_agent_prefix("MyApp/1.0")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url(), "https://sandbox-api.paddle.com");
/// ```
#[derive(Debug, Default)]
pub struct PaddleConfigBuilder {
    api_key: Option<ApiKey>,
    environment: Option<Environment>,
    api_version: Option<u16>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl PaddleConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the environment.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Sets the API version sent in the `Paddle-Version` header.
    #[must_use]
    pub const fn api_version(mut self, version: u16) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sends requests to `host` instead of the environment URL.
    ///
    /// Test seam for pointing a client at a mock server; only available with
    /// the `test-util` feature.
    #[cfg(any(test, feature = "test-util"))]
    #[doc(hidden)]
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the total timeout applied to each request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`PaddleConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    /// Returns [`ConfigError::InvalidApiVersion`] if the version is zero.
    pub fn build(self) -> Result<PaddleConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let api_version = self.api_version.unwrap_or(DEFAULT_API_VERSION);
        if api_version == 0 {
            return Err(ConfigError::InvalidApiVersion {
                version: api_version,
            });
        }

        Ok(PaddleConfig {
            api_key,
            environment: self.environment.unwrap_or_default(),
            api_version,
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = PaddleConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = PaddleConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.environment(), Environment::Production);
        assert_eq!(config.api_version(), DEFAULT_API_VERSION);
        assert!(config.api_host().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
        assert_eq!(config.base_url(), "https://api.paddle.com");
    }

    #[test]
    fn test_builder_rejects_zero_api_version() {
        let result = PaddleConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .api_version(0)
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidApiVersion { version: 0 })
        ));
    }

    #[test]
    fn test_base_url_follows_environment() {
        for (environment, expected) in [
            (Environment::Production, "https://api.paddle.com"),
            (Environment::Sandbox, "https://sandbox-api.paddle.com"),
        ] {
            let config = PaddleConfig::builder()
                .api_key(ApiKey::new("key").unwrap())
                .environment(environment)
                .build()
                .unwrap();

            assert!(config.api_host().is_none());
            assert_eq!(config.base_url(), expected);
            assert_eq!(config.base_url(), environment.base_url());
        }
    }

    #[test]
    fn test_api_host_overrides_routing_but_keeps_environment() {
        let config = PaddleConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .environment(Environment::Sandbox)
            .api_host(HostUrl::new("http://127.0.0.1:9000").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url(), "http://127.0.0.1:9000");
        assert_eq!(config.environment(), Environment::Sandbox);
    }

    #[test]
    fn test_config_debug_does_not_leak_key() {
        let config = PaddleConfig::builder()
            .api_key(ApiKey::new("pdl_live_secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("PaddleConfig"));
        assert!(!debug_str.contains("pdl_live_secret"));
    }
}
