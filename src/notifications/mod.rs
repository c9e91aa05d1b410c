//! Verification of webhook notifications sent by Paddle.
//!
//! Paddle signs every notification with each active secret of the
//! notification destination and sends the result in the `Paddle-Signature`
//! header:
//!
//! ```text
//! Paddle-Signature: ts=1671552777;h1=eb4d0dc8853be92b7f063b9f3ba5233eb920a09459b6e6b2c26705b4364db151
//! ```
//!
//! The `h1` value is the lowercase hex HMAC-SHA256 of `"{ts}:{raw body}"`.
//! During secret rotation the header carries one `h1` entry per secret.
//!
//! # Example
//!
//! ```rust
//! use paddle_billing::notifications::{compute_signature, Secret, Verifier};
//!
//! let secret = Secret::new("pdl_ntfset_01gkpjp8bkh2ys2pz8rk1cxpzw_secret").unwrap();
//! let body = br#"{"event_type":"product.created"}"#;
//! let now = chrono::Utc::now().timestamp();
//! let header = format!("ts={now};h1={}", compute_signature(now, body, &secret));
//!
//! let verifier = Verifier::new();
//! assert!(verifier.verify(Some(&header), body, &[secret]).is_ok());
//! ```

mod errors;
mod secret;
mod signature;
mod verifier;

pub use errors::VerificationError;
pub use secret::Secret;
pub use signature::{compute_signature, PaddleSignature, SIGNATURE_HEADER};
pub use verifier::{Verifier, DEFAULT_MAXIMUM_VARIANCE};
