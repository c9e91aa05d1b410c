//! The typed error the API reports for rejected requests.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

crate::paddle_enum! {
    /// The family an [`ApiError`] belongs to.
    pub enum ErrorType {
        /// The request was rejected; correcting the input can resolve it.
        RequestError => "request_error",
        /// The API failed to process a valid request.
        ApiError => "api_error",
    }
}

/// A validation error on a single request field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    /// The field the error applies to.
    pub field: String,
    /// The validation message.
    pub error: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

/// Error returned when the API rejects a request with an error envelope.
///
/// Built from the `error` section of a response body:
///
/// ```json
/// {
///   "error": {
///     "type": "request_error",
///     "code": "bad_request",
///     "detail": "Invalid request",
///     "documentation_url": "https://developer.paddle.com/v1/errors/shared/bad_request",
///     "errors": [{"field": "some_field", "message": "Some error message"}]
///   },
///   "meta": {"request_id": "f00bb3ca-399d-4686-889c-50b028f4c912"}
/// }
/// ```
///
/// A section counts as an envelope only when it carries a string `type` or
/// `code`. Whether it is returned as an error is decided by the HTTP client,
/// based on the response status.
///
/// # Example
///
/// ```rust
/// use paddle_billing::ResponseParser;
/// use serde_json::json;
///
/// let parser = ResponseParser::new(json!({
///     "error": {
///         "type": "request_error",
///         "code": "not_found",
///         "detail": "Entity pro_01 not found",
///         "documentation_url": "https://developer.paddle.com/v1/errors/shared/not_found"
///     }
/// }));
///
/// let error = parser.get_error().unwrap();
/// assert_eq!(error.error_type, "request_error");
/// assert_eq!(error.error_code, "not_found");
/// assert!(error.field_errors.is_empty());
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{error_type} {error_code}: {detail}")]
pub struct ApiError {
    /// The error family, e.g. `request_error`.
    pub error_type: ErrorType,
    /// The machine-readable error code, e.g. `bad_request`.
    pub error_code: String,
    /// A human-readable explanation.
    pub detail: String,
    /// Link to the documentation for this error code.
    pub docs_url: String,
    /// Per-field validation errors, in the order the API reported them.
    pub field_errors: Vec<FieldError>,
    /// The request id from the response `meta` section.
    pub request_id: Option<String>,
}

fn string_at<'a>(section: &'a Value, key: &str) -> Option<&'a str> {
    section.get(key).and_then(Value::as_str)
}

impl ApiError {
    /// Builds an error from the `error` section of a response body.
    ///
    /// Each key is read on its own; a missing or non-string key becomes an
    /// empty string. Returns `None` unless the section is an object with a
    /// string `type` or `code`.
    #[must_use]
    pub fn from_envelope(error: &Value, request_id: Option<&str>) -> Option<Self> {
        let error_type = string_at(error, "type");
        let code = string_at(error, "code");
        if error_type.is_none() && code.is_none() {
            return None;
        }

        let field_errors = error
            .get("errors")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|entry| entry.is_object())
                    .map(|entry| FieldError {
                        field: string_at(entry, "field").unwrap_or_default().to_string(),
                        error: string_at(entry, "message").unwrap_or_default().to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            error_type: ErrorType::from_value(error_type.unwrap_or_default()),
            error_code: code.unwrap_or_default().to_string(),
            detail: string_at(error, "detail").unwrap_or_default().to_string(),
            docs_url: string_at(error, "documentation_url")
                .unwrap_or_default()
                .to_string(),
            field_errors,
            request_id: request_id.map(ToString::to_string),
        })
    }

    /// Returns `true` if this is a request error.
    #[must_use]
    pub fn is_request_error(&self) -> bool {
        self.error_type == ErrorType::RequestError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_envelope_reads_all_fields() {
        let error = ApiError::from_envelope(
            &json!({
                "type": "request_error",
                "code": "bad_request",
                "detail": "Invalid request",
                "documentation_url": "https://developer.paddle.com/v1/errors/shared/bad_request",
                "errors": [
                    {"field": "name", "message": "is required"},
                    {"field": "tax_category", "message": "is invalid"}
                ]
            }),
            Some("req-1"),
        )
        .unwrap();

        assert_eq!(error.error_type, ErrorType::RequestError);
        assert!(error.is_request_error());
        assert_eq!(error.error_code, "bad_request");
        assert_eq!(error.detail, "Invalid request");
        assert_eq!(
            error.docs_url,
            "https://developer.paddle.com/v1/errors/shared/bad_request"
        );
        assert_eq!(error.field_errors.len(), 2);
        assert_eq!(error.field_errors[1].field, "tax_category");
        assert_eq!(error.field_errors[1].error, "is invalid");
        assert_eq!(error.request_id.as_deref(), Some("req-1"));
    }

    #[test]
    fn test_missing_errors_key_gives_empty_field_errors() {
        let error = ApiError::from_envelope(
            &json!({"type": "api_error", "code": "internal_error", "detail": "Oops"}),
            None,
        )
        .unwrap();

        assert!(error.field_errors.is_empty());
        assert!(!error.is_request_error());
        assert_eq!(error.docs_url, "");
    }

    #[test]
    fn test_unknown_error_type_is_kept() {
        let error = ApiError::from_envelope(&json!({"type": "billing_error"}), None).unwrap();
        assert_eq!(error.error_type, "billing_error");
        assert!(!error.error_type.is_known());
    }

    #[test]
    fn test_null_documentation_url_keeps_other_fields() {
        let error = ApiError::from_envelope(
            &json!({
                "type": "request_error",
                "code": "bad_request",
                "detail": "Invalid request",
                "documentation_url": null,
                "errors": [{"field": "some_field", "message": "Some error message"}]
            }),
            None,
        )
        .unwrap();

        assert_eq!(error.error_type, ErrorType::RequestError);
        assert_eq!(error.error_code, "bad_request");
        assert_eq!(error.detail, "Invalid request");
        assert_eq!(error.docs_url, "");
        assert_eq!(
            error.field_errors,
            vec![FieldError {
                field: "some_field".to_string(),
                error: "Some error message".to_string(),
            }]
        );
    }

    #[test]
    fn test_wrongly_typed_keys_are_read_independently() {
        let error = ApiError::from_envelope(
            &json!({
                "code": "bad_request",
                "detail": 42,
                "errors": [
                    "not an entry",
                    {"field": "name", "message": null},
                    {"field": "price", "message": "is invalid"}
                ]
            }),
            None,
        )
        .unwrap();

        assert_eq!(error.error_code, "bad_request");
        assert_eq!(error.error_type, "");
        assert_eq!(error.detail, "");
        assert_eq!(error.field_errors.len(), 2);
        assert_eq!(error.field_errors[0].field, "name");
        assert_eq!(error.field_errors[0].error, "");
        assert_eq!(error.field_errors[1].error, "is invalid");
    }

    #[test]
    fn test_section_without_type_or_code_is_not_an_api_error() {
        assert!(ApiError::from_envelope(&json!({}), None).is_none());
        assert!(ApiError::from_envelope(&json!({"foo": 1}), None).is_none());
        assert!(ApiError::from_envelope(&json!({"code": 42, "detail": "x"}), None).is_none());
    }

    #[test]
    fn test_non_object_section_is_not_an_api_error() {
        assert!(ApiError::from_envelope(&json!("oops"), None).is_none());
        assert!(ApiError::from_envelope(&json!(null), None).is_none());
    }

    #[test]
    fn test_display_includes_code_and_detail() {
        let error = ApiError::from_envelope(
            &json!({"type": "request_error", "code": "bad_request", "detail": "Invalid request"}),
            None,
        )
        .unwrap();
        assert_eq!(error.to_string(), "request_error bad_request: Invalid request");
    }
}
