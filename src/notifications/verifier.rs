use chrono::{DateTime, Utc};

use super::{PaddleSignature, Secret, VerificationError};

/// Default allowed age of a notification signature, in seconds.
pub const DEFAULT_MAXIMUM_VARIANCE: i64 = 5;

/// Verifies that notifications were sent by Paddle.
///
/// A notification is accepted when its `Paddle-Signature` header parses, its
/// timestamp is no older than the maximum variance, and one of its `h1`
/// values matches the body under one of the given secrets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verifier {
    maximum_variance: Option<i64>,
}

impl Verifier {
    /// Creates a verifier allowing [`DEFAULT_MAXIMUM_VARIANCE`] seconds.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            maximum_variance: Some(DEFAULT_MAXIMUM_VARIANCE),
        }
    }

    /// Sets the allowed signature age in seconds. `None` disables the check.
    #[must_use]
    pub const fn maximum_variance(mut self, seconds: Option<i64>) -> Self {
        self.maximum_variance = seconds;
        self
    }

    /// Returns the allowed signature age in seconds, if checked.
    #[must_use]
    pub const fn get_maximum_variance(&self) -> Option<i64> {
        self.maximum_variance
    }

    /// Verifies a notification against the current time.
    ///
    /// `signature_header` is the raw `Paddle-Signature` header value and
    /// `raw_body` the request body exactly as received.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError`] naming the first check that failed.
    pub fn verify(
        &self,
        signature_header: Option<&str>,
        raw_body: &[u8],
        secrets: &[Secret],
    ) -> Result<PaddleSignature, VerificationError> {
        self.verify_at(signature_header, raw_body, secrets, Utc::now())
    }

    /// Verifies a notification as if received at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError`] naming the first check that failed.
    pub fn verify_at(
        &self,
        signature_header: Option<&str>,
        raw_body: &[u8],
        secrets: &[Secret],
        now: DateTime<Utc>,
    ) -> Result<PaddleSignature, VerificationError> {
        let header = signature_header
            .filter(|header| !header.trim().is_empty())
            .ok_or(VerificationError::MissingHeader)?;
        let signature: PaddleSignature = header.parse()?;

        if let Some(maximum_variance) = self.maximum_variance {
            if now.timestamp() > signature.timestamp().saturating_add(maximum_variance) {
                tracing::debug!(
                    timestamp = signature.timestamp(),
                    maximum_variance,
                    "Rejecting stale notification signature"
                );
                return Err(VerificationError::StaleTimestamp {
                    timestamp: signature.timestamp(),
                    maximum_variance,
                });
            }
        }

        if !signature.matches(raw_body, secrets) {
            tracing::debug!(
                secrets = secrets.len(),
                "Notification signature does not match"
            );
            return Err(VerificationError::SignatureMismatch);
        }

        Ok(signature)
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new()
    }
}
