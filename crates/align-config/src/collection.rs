//! Work item collection configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CollectionConfig {
    /// Collection (server) URL. Informational; shown in logs and `vars`.
    #[serde(default)]
    pub url: String,

    /// Project whose test plans hold the copied test cases.
    #[serde(default)]
    pub destination_project: String,

    /// Path to the JSON snapshot backing the work item store.
    #[serde(default)]
    pub snapshot: String,
}

impl CollectionConfig {
    /// Whether there is enough to open a collection and pick a project.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.destination_project.is_empty() && !self.snapshot.is_empty()
    }
}
