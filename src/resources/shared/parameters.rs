//! Flattening of list and get operations into query parameters.

use std::fmt;

use crate::enums::{EnumValue, PaddleEnum};

/// A single parameter value.
///
/// Enumerations are kept as [`EnumValue`] snapshots rather than bare strings,
/// so a parameter record still knows which values were declared members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParameterValue {
    /// Free text, such as an ID or cursor.
    Text(String),
    /// A whole number.
    Integer(i64),
    /// A flag.
    Bool(bool),
    /// An enumeration member.
    Enum(EnumValue),
    /// Several values, sent comma separated.
    List(Vec<ParameterValue>),
}

impl ParameterValue {
    /// Builds a value from an enumeration member.
    #[must_use]
    pub fn from_enum<E: PaddleEnum>(member: &E) -> Self {
        Self::Enum(member.to_enum_value())
    }

    /// Builds a list of enumeration members.
    #[must_use]
    pub fn from_enums<'a, E, I>(members: I) -> Self
    where
        E: PaddleEnum + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        Self::List(members.into_iter().map(Self::from_enum).collect())
    }

    /// Builds a list of text values.
    #[must_use]
    pub fn from_texts<S, I>(values: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        Self::List(
            values
                .into_iter()
                .map(|value| Self::Text(value.as_ref().to_string()))
                .collect(),
        )
    }

    /// Returns the query string form, or `None` for an empty list.
    #[must_use]
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            Self::List(values) => {
                let parts: Vec<String> = values.iter().filter_map(Self::to_query_value).collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(","))
                }
            }
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Enum(value) => f.write_str(value.value()),
            Self::List(values) => {
                let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
                f.write_str(&parts.join(","))
            }
        }
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for ParameterValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<EnumValue> for ParameterValue {
    fn from(value: EnumValue) -> Self {
        Self::Enum(value)
    }
}

/// An ordered record of operation parameters.
///
/// # Example
///
/// ```rust
/// use paddle_billing::resources::{HasParameters, Pager};
///
/// let parameters = Pager::default().get_parameters();
/// assert_eq!(
///     parameters.to_query(),
///     vec![
///         ("order_by".to_string(), "id[asc]".to_string()),
///         ("per_page".to_string(), "50".to_string()),
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parameters(Vec<(String, ParameterValue)>);

impl Parameters {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<ParameterValue>) {
        self.0.push((key.into(), value.into()));
    }

    /// Appends a parameter if `value` is `Some`.
    pub fn push_opt<V: Into<ParameterValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Appends every parameter of `other`.
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Returns the first value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParameterValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flattens the record into query pairs, dropping empty lists.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter_map(|(key, value)| value.to_query_value().map(|v| (key.clone(), v)))
            .collect()
    }
}

/// Operations that are sent as query parameters.
pub trait HasParameters {
    /// Returns this operation's parameters in the order they are sent.
    fn get_parameters(&self) -> Parameters;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Status, TaxCategory};

    #[test]
    fn test_enum_parameters_keep_rich_value() {
        let mut parameters = Parameters::new();
        parameters.push("status", ParameterValue::from_enum(&Status::Active));

        let Some(ParameterValue::Enum(value)) = parameters.get("status") else {
            panic!("expected an enum parameter");
        };
        assert_eq!(*value, "active");
        assert_eq!(value.name(), "Active");
        assert!(value.is_known());
    }

    #[test]
    fn test_lists_are_comma_joined_and_empty_lists_dropped() {
        let mut parameters = Parameters::new();
        parameters.push(
            "tax_category",
            ParameterValue::from_enums(&[TaxCategory::Saas, TaxCategory::from_value("new-tax")]),
        );
        parameters.push("id", ParameterValue::from_texts(Vec::<String>::new()));
        parameters.push("recurring", true);

        assert_eq!(
            parameters.to_query(),
            vec![
                ("tax_category".to_string(), "saas,new-tax".to_string()),
                ("recurring".to_string(), "true".to_string()),
            ]
        );
        assert_eq!(parameters.len(), 3);
    }

    #[test]
    fn test_push_opt_skips_none() {
        let mut parameters = Parameters::new();
        parameters.push_opt::<String>("after", None);
        parameters.push_opt("per_page", Some(10_u32));

        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters.get("per_page"), Some(&ParameterValue::Integer(10)));
    }
}
