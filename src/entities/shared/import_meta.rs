//! Import metadata for entities migrated from another platform.

use serde::{Deserialize, Serialize};

/// Where an imported entity came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportMeta {
    /// Name of the platform the entity was imported from.
    pub imported_from: String,
    /// Identifier of the entity on that platform.
    #[serde(default)]
    pub external_id: Option<String>,
}
