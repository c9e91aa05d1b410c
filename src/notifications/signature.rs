//! Parsing and computing `Paddle-Signature` values.

use std::str::FromStr;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::{Secret, VerificationError};

type HmacSha256 = Hmac<Sha256>;

/// Name of the header carrying the notification signature.
pub const SIGNATURE_HEADER: &str = "Paddle-Signature";

/// A parsed `Paddle-Signature` header.
///
/// # Example
///
/// ```rust
/// use paddle_billing::notifications::PaddleSignature;
///
/// let signature: PaddleSignature = "ts=1671552777;h1=ab12;h1=cd34".parse().unwrap();
/// assert_eq!(signature.timestamp(), 1_671_552_777);
/// assert_eq!(signature.hashes(), ["ab12", "cd34"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddleSignature {
    timestamp: i64,
    hashes: Vec<String>,
}

impl PaddleSignature {
    /// Returns the Unix timestamp the notification was signed at.
    #[must_use]
    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Returns every `h1` value, one per active secret.
    #[must_use]
    pub fn hashes(&self) -> &[String] {
        &self.hashes
    }

    /// Returns `true` if any `h1` value is the signature of `raw_body` under
    /// one of `secrets`.
    #[must_use]
    pub fn matches(&self, raw_body: &[u8], secrets: &[Secret]) -> bool {
        secrets.iter().any(|secret| {
            let expected = compute_signature(self.timestamp, raw_body, secret);
            self.hashes
                .iter()
                .any(|hash| constant_time_compare(&expected, hash))
        })
    }
}

impl FromStr for PaddleSignature {
    type Err = VerificationError;

    fn from_str(header: &str) -> Result<Self, Self::Err> {
        let mut timestamp = None;
        let mut hashes = Vec::new();

        for part in header.split(';') {
            let Some((key, value)) = part.split_once('=') else {
                return Err(VerificationError::MalformedHeader {
                    reason: "expected key=value pairs",
                });
            };
            match key.trim() {
                "ts" => {
                    let ts = value
                        .trim()
                        .parse::<i64>()
                        .map_err(|_| VerificationError::MalformedHeader {
                            reason: "ts is not a Unix timestamp",
                        })?;
                    timestamp = Some(ts);
                }
                "h1" => hashes.push(value.trim().to_string()),
                // Newer schemes are skipped so existing verifiers keep working.
                _ => {}
            }
        }

        let timestamp = timestamp.ok_or(VerificationError::MalformedHeader {
            reason: "missing ts",
        })?;
        if hashes.is_empty() {
            return Err(VerificationError::MalformedHeader {
                reason: "missing h1",
            });
        }

        Ok(Self { timestamp, hashes })
    }
}

/// Computes the `h1` signature of a notification body.
///
/// The signed payload is `"{timestamp}:{raw_body}"`, and the result is the
/// lowercase hex HMAC-SHA256 under `secret`.
///
/// # Example
///
/// ```rust
/// use paddle_billing::notifications::{compute_signature, Secret};
///
/// let signature = compute_signature(1_671_552_777, b"{}", &Secret::new("secret").unwrap());
/// assert_eq!(signature.len(), 64);
/// ```
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(timestamp: i64, raw_body: &[u8], secret: &Secret) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_ref().as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b":");
    mac.update(raw_body);
    hex::encode(mac.finalize().into_bytes())
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut result = String::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            result.push(HEX_CHARS[(byte >> 4) as usize] as char);
            result.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &[u8] =
        br#"{"event_id":"evt_01h8bzakzx3hm2fmen703n5q45","event_type":"product.created"}"#;
    const SIGNATURE: &str = "a2b5fccdc7cf40ca5f0ed0783c4057c5e42afefd42d1cf1fbc78866437fe1998";

    fn secret() -> Secret {
        Secret::new("pdl_ntfset_01gkpjp8bkh2ys2pz8rk1cxpzw_secret").unwrap()
    }

    #[test]
    fn test_compute_signature_matches_known_digest() {
        assert_eq!(compute_signature(1_671_552_777, BODY, &secret()), SIGNATURE);
    }

    #[test]
    fn test_hex_encode() {
        assert_eq!(hex::encode([0x00, 0x0f, 0xab, 0xff]), "000fabff");
    }

    #[test]
    fn test_parse_ignores_unknown_schemes() {
        let signature: PaddleSignature = "ts=1;h2=zz;h1=abc".parse().unwrap();
        assert_eq!(signature.timestamp(), 1);
        assert_eq!(signature.hashes(), ["abc"]);
    }

    #[test]
    fn test_parse_rejects_malformed_headers() {
        for header in ["", "h1=abc", "ts=1", "ts=soon;h1=abc", "ts=1;h1"] {
            assert!(
                matches!(
                    header.parse::<PaddleSignature>(),
                    Err(VerificationError::MalformedHeader { .. })
                ),
                "{header:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_matches_any_hash_for_any_secret() {
        let rotated: PaddleSignature =
            format!("ts=1671552777;h1=8b93bfee7b66a2875da36d9f5e52b1cb52869bb2c8d084b6cbb021b363a8153c;h1={SIGNATURE}")
                .parse()
                .unwrap();

        assert!(rotated.matches(BODY, &[secret()]));
        assert!(rotated.matches(BODY, &[Secret::new("other_secret").unwrap()]));
        assert!(!rotated.matches(BODY, &[Secret::new("unknown").unwrap()]));
        assert!(!rotated.matches(b"{}", &[secret()]));
    }
}
