//! Paddle API environments.
//!
//! This module provides the [`Environment`] enum selecting which Paddle
//! deployment requests are sent to.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A named Paddle environment.
///
/// Each environment maps to a fixed base URL. Sandbox accounts use separate
/// API keys from production accounts.
///
/// # Example
///
/// ```rust
/// use paddle_billing::Environment;
///
/// let env: Environment = "sandbox".parse().unwrap();
/// assert_eq!(env, Environment::Sandbox);
/// assert_eq!(env.base_url(), "https://sandbox-api.paddle.com");
/// assert_eq!(Environment::default(), Environment::Production);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Live environment processing real transactions.
    #[default]
    Production,
    /// Test environment for integration work.
    Sandbox,
}

impl Environment {
    /// Returns the base URL for this environment, without a trailing slash.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Self::Production => "https://api.paddle.com",
            Self::Sandbox => "https://sandbox-api.paddle.com",
        }
    }

    /// Returns all known environments.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Production, Self::Sandbox]
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Production => "production",
            Self::Sandbox => "sandbox",
        })
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "sandbox" => Ok(Self::Sandbox),
            other => Err(ConfigError::InvalidEnvironment {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_base_urls() {
        assert_eq!(Environment::Production.base_url(), "https://api.paddle.com");
        assert_eq!(
            Environment::Sandbox.base_url(),
            "https://sandbox-api.paddle.com"
        );
    }

    #[test]
    fn test_environment_parses_case_insensitively() {
        assert_eq!(
            "Production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            " SANDBOX ".parse::<Environment>().unwrap(),
            Environment::Sandbox
        );
    }

    #[test]
    fn test_environment_rejects_unknown_names() {
        assert!(matches!(
            "staging".parse::<Environment>(),
            Err(ConfigError::InvalidEnvironment { name }) if name == "staging"
        ));
    }

    #[test]
    fn test_environment_display_round_trips() {
        for env in Environment::all() {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
    }
}
