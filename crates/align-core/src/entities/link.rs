use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::fields::WorkItemId;

/// A link attached to a work item.
///
/// Only `Related` links point at another work item, and only those can carry
/// provenance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Link {
    Related {
        target_id: WorkItemId,
        link_type_end: String,
        #[serde(default)]
        comment: String,
    },
    Hyperlink {
        location: String,
        #[serde(default)]
        comment: String,
    },
    Attachment {
        name: String,
        #[serde(default)]
        comment: String,
    },
    External {
        uri: String,
        #[serde(default)]
        comment: String,
    },
}

impl Link {
    /// Comment text, whatever the link kind.
    #[must_use]
    pub fn comment(&self) -> &str {
        match self {
            Self::Related { comment, .. }
            | Self::Hyperlink { comment, .. }
            | Self::Attachment { comment, .. }
            | Self::External { comment, .. } => comment,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Related { .. } => "related",
            Self::Hyperlink { .. } => "hyperlink",
            Self::Attachment { .. } => "attachment",
            Self::External { .. } => "external",
        }
    }
}
