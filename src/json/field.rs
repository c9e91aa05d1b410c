//! Tri-state request fields.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A request field that can be left out, cleared, or set.
///
/// `Option<T>` cannot tell "do not touch this field" apart from "clear this
/// field". Update operations need both, so optional request fields use
/// `Field<T>` together with `#[serde(default, skip_serializing_if = "Field::is_unset")]`.
///
/// | Variant        | Encoded as          |
/// |----------------|---------------------|
/// | `Unset`        | key omitted         |
/// | `Null`         | `"key": null`       |
/// | `Set(value)`   | `"key": value`      |
///
/// # Example
///
/// ```rust
/// use paddle_billing::json::Field;
///
/// let description: Field<String> = "A description".to_string().into();
/// assert!(description.is_set());
///
/// let cleared: Field<String> = Field::Null;
/// assert!(!cleared.is_unset());
/// assert_eq!(cleared.as_option(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Field<T> {
    /// Not sent.
    #[default]
    Unset,
    /// Sent as `null`.
    Null,
    /// Sent as the value.
    Set(T),
}

impl<T> Field<T> {
    /// Returns `true` if the field is not sent.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns `true` if the field carries a value.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Returns the value, if set.
    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unset | Self::Null => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Set(value)
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Set)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Set(value) => value.serialize(serializer),
            Self::Unset | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Update {
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        name: Field<String>,
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        description: Field<String>,
    }

    #[test]
    fn test_unset_is_omitted_and_null_is_emitted() {
        let update = Update {
            name: Field::Set("New".to_string()),
            description: Field::Null,
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"name": "New", "description": null})
        );

        let empty = Update {
            name: Field::Unset,
            description: Field::Unset,
        };
        assert_eq!(serde_json::to_value(&empty).unwrap(), json!({}));
    }

    #[test]
    fn test_deserialize_distinguishes_missing_and_null() {
        let update: Update = serde_json::from_value(json!({"description": null})).unwrap();
        assert_eq!(update.name, Field::Unset);
        assert_eq!(update.description, Field::Null);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Field::<i32>::from(Some(3)), Field::Set(3));
        assert_eq!(Field::<i32>::from(None::<i32>), Field::Null);
    }
}
