//! JSON payload encoding for request bodies.
//!
//! Operations, value objects and entities derive [`serde::Serialize`], so the
//! recursive walk over nested structures is done by serde. The rules that
//! matter on the wire are expressed through serde attributes on each type:
//!
//! - Enumerations declared with [`paddle_enum!`](crate::paddle_enum) encode as
//!   their wire value.
//! - Fields are renamed with `#[serde(rename = "...")]` where the wire name
//!   differs from the Rust name.
//! - Optional fields use [`Field`] and are dropped while unset. A field set
//!   to [`Field::Null`] is emitted as JSON `null`.
//! - [`CustomData`](crate::entities::CustomData) passes through as a plain
//!   JSON object without any key translation.
//!
//! [`PayloadEncoder`] wraps the serialization step and turns a serde failure
//! into an [`EncodeError`] naming the type that could not be encoded.

mod field;

pub use field::Field;

use serde::Serialize;
use thiserror::Error;

/// Error returned when a request payload cannot be encoded as JSON.
///
/// This indicates a defect in the calling code (for example a map with
/// non-string keys), not a failure reported by the API.
#[derive(Debug, Error)]
#[error("Cannot encode payload of type `{type_name}` as JSON: {source}")]
pub struct EncodeError {
    /// The Rust type that failed to encode.
    pub type_name: &'static str,
    /// The underlying serializer error.
    #[source]
    pub source: serde_json::Error,
}

/// Encodes request payloads into JSON.
///
/// # Example
///
/// ```rust
/// use paddle_billing::json::{Field, PayloadEncoder};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Rename {
///     name: String,
///     #[serde(skip_serializing_if = "Field::is_unset")]
///     description: Field<String>,
///     #[serde(skip_serializing_if = "Field::is_unset")]
///     image_url: Field<String>,
/// }
///
/// let payload = Rename {
///     name: "Analytics addon".to_string(),
///     description: Field::Unset,
///     image_url: Field::Null,
/// };
///
/// let encoded = PayloadEncoder::encode_to_string(&payload).unwrap();
/// assert_eq!(encoded, r#"{"name":"Analytics addon","image_url":null}"#);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct PayloadEncoder;

impl PayloadEncoder {
    /// Encodes `payload` into a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if any part of the payload cannot be
    /// represented as JSON.
    pub fn encode<T>(payload: &T) -> Result<serde_json::Value, EncodeError>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_value(payload).map_err(|source| EncodeError {
            type_name: std::any::type_name::<T>(),
            source,
        })
    }

    /// Encodes `payload` into JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if any part of the payload cannot be
    /// represented as JSON.
    pub fn encode_to_string<T>(payload: &T) -> Result<String, EncodeError>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_string(payload).map_err(|source| EncodeError {
            type_name: std::any::type_name::<T>(),
            source,
        })
    }
}
