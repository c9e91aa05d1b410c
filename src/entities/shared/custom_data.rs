//! Opaque, caller-defined key/value data.

use serde::{Deserialize, Serialize};

/// Arbitrary structured data attached to an entity.
///
/// Paddle stores custom data as-is. Keys are never renamed or translated in
/// either direction.
///
/// # Example
///
/// ```rust
/// use paddle_billing::entities::CustomData;
/// use serde_json::json;
///
/// let mut data = CustomData::new();
/// data.insert("features", json!({"reports": true, "crmIntegration": false}));
///
/// assert_eq!(data.get("features").unwrap()["crmIntegration"], false);
/// assert_eq!(
///     serde_json::to_value(&data).unwrap(),
///     json!({"features": {"reports": true, "crmIntegration": false}})
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomData(serde_json::Map<String, serde_json::Value>);

impl CustomData {
    /// Creates empty custom data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the previous value for the key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Option<serde_json::Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.0
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for CustomData {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, serde_json::Value)> for CustomData {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
