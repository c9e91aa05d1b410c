use thiserror::Error;

/// Reasons a notification fails verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// The request carried no `Paddle-Signature` header.
    #[error("Missing Paddle-Signature header")]
    MissingHeader,

    /// The header is not of the form `ts=<unix>;h1=<hex>`.
    #[error("Malformed Paddle-Signature header: {reason}")]
    MalformedHeader {
        /// What is wrong with the header.
        reason: &'static str,
    },

    /// The signature timestamp is older than the allowed variance.
    #[error("Signature timestamp {timestamp} is older than {maximum_variance} seconds")]
    StaleTimestamp {
        /// The `ts` value of the header.
        timestamp: i64,
        /// The allowed age in seconds.
        maximum_variance: i64,
    },

    /// No `h1` entry matches a signature computed with the given secrets.
    #[error("Signature does not match any notification secret")]
    SignatureMismatch,
}
