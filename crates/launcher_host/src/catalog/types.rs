//! Application catalog data types exchanged with the host.

use serde::{Deserialize, Serialize};

/// Encoded icon reference returned by the host (a `data:image/png;base64,...` URL).
pub type IconPayload = String;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// One launchable application known to the host.
///
/// Field names on the wire follow the host's command payloads (`id`, `name`, `path`,
/// `category`).
pub struct ApplicationRecord {
    /// Opaque key, unique within the catalog for the session.
    #[serde(rename = "id")]
    pub identifier: String,
    /// Human-readable name. Not guaranteed unique.
    #[serde(rename = "name")]
    pub display_name: String,
    /// Host launch target. Also the icon-cache key and the catalog's uniqueness key.
    #[serde(rename = "path")]
    pub launch_path: String,
    /// Free-form, user-editable category bucket.
    pub category: String,
}

impl ApplicationRecord {
    /// Builds a record from its four fields.
    pub fn new(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        launch_path: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            launch_path: launch_path.into(),
            category: category.into(),
        }
    }
}
