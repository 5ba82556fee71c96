//! Serde adapter writing work item ids as decimal strings.
//!
//! The audit document carries ids as strings; reading accepts either a
//! string or a bare number. Zero is rejected.

use serde::{Deserialize, Deserializer, Serializer, de};

use crate::fields::WorkItemId;

pub fn serialize<S: Serializer>(id: &WorkItemId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(id)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<WorkItemId, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(WorkItemId),
    }

    let id = match Raw::deserialize(deserializer)? {
        Raw::Number(id) => id,
        Raw::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid work item id: {text:?}")))?,
    };
    if id == 0 {
        return Err(de::Error::custom("work item ids start at 1"));
    }
    Ok(id)
}
