//! Opaque description values.
//!
//! The store may hold plain text or structured rich content in the
//! description field. Alignment never inspects it: the old item's value is
//! copied onto the new item whole.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Description / test summary value, passed through verbatim.
///
/// Untagged so the serialized form is exactly what the store holds: `null`,
/// a string, or an arbitrary JSON structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum Description {
    #[default]
    Empty,
    Text(String),
    Rich(serde_json::Value),
}

impl Description {
    /// Wrap a raw store value, normalizing `null` and strings.
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Empty,
            serde_json::Value::String(text) => Self::Text(text),
            other => Self::Rich(other),
        }
    }

    /// The raw store value.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        match self {
            Self::Empty => serde_json::Value::Null,
            Self::Text(text) => serde_json::Value::String(text.clone()),
            Self::Rich(value) => value.clone(),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
