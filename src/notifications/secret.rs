use std::fmt;

use crate::error::ConfigError;

/// A notification destination secret key.
///
/// The `Debug` implementation masks the value.
///
/// # Example
///
/// ```rust
/// use paddle_billing::notifications::Secret;
///
/// let secret = Secret::new("pdl_ntfset_01gkpjp8bkh2ys2pz8rk1cxpzw_secret").unwrap();
/// assert_eq!(format!("{secret:?}"), "Secret(*****)");
/// assert!(Secret::new("  ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Creates a new secret, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into().trim().to_string();
        if secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for Secret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(*****)")
    }
}
