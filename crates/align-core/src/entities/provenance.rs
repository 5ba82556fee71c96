use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::description::Description;
use crate::fields::WorkItemId;

/// A confirmed pairing between a copied (new) item and its source (old) item,
/// plus the old item's fields to restore.
///
/// Only built from related links whose comment carries the migration marker.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProvenanceRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "NewID", with = "crate::id_string")]
    #[schemars(with = "String")]
    pub new_id: WorkItemId,
    #[serde(rename = "OldID", with = "crate::id_string")]
    #[schemars(with = "String")]
    pub old_id: WorkItemId,
    #[serde(rename = "LinkType")]
    pub link_type: String,
    #[serde(rename = "LinkComment")]
    pub link_comment: String,
    #[serde(rename = "OldHistory")]
    pub old_history: String,
    #[serde(rename = "OldTestSummary")]
    pub old_description: Description,
    #[serde(rename = "OldItemAreaPath")]
    pub old_area_path: String,
}
