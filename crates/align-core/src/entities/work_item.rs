use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::description::Description;
use crate::entities::Link;
use crate::fields::{self, WorkItemId};

/// A work item as read from the store.
///
/// Fields are keyed by reference name (`System.Title`, ...). Typed accessors
/// cover the fields alignment reads and writes; everything else is carried
/// through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WorkItem {
    pub id: WorkItemId,
    #[serde(default)]
    pub rev: u32,
    #[serde(default)]
    pub fields: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl WorkItem {
    #[must_use]
    pub fn new(id: WorkItemId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Raw field value by reference name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.fields.get(name)
    }

    pub fn set_field(&mut self, name: &str, value: serde_json::Value) {
        self.fields.insert(name.to_string(), value);
    }

    fn text_field(&self, name: &str) -> &str {
        self.field(name)
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.text_field(fields::TITLE)
    }

    #[must_use]
    pub fn history(&self) -> &str {
        self.text_field(fields::HISTORY)
    }

    #[must_use]
    pub fn area_path(&self) -> &str {
        self.text_field(fields::AREA_PATH)
    }

    #[must_use]
    pub fn description(&self) -> Description {
        self.field(fields::DESCRIPTION)
            .cloned()
            .map(Description::from_value)
            .unwrap_or_default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.set_field(fields::TITLE, serde_json::Value::String(title.into()));
    }

    pub fn set_history(&mut self, history: impl Into<String>) {
        self.set_field(fields::HISTORY, serde_json::Value::String(history.into()));
    }

    pub fn set_area_path(&mut self, path: impl Into<String>) {
        self.set_field(fields::AREA_PATH, serde_json::Value::String(path.into()));
    }

    pub fn set_description(&mut self, description: &Description) {
        self.set_field(fields::DESCRIPTION, description.to_value());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_fields_read_as_empty() {
        let item = WorkItem::new(3);
        assert_eq!(item.title(), "");
        assert_eq!(item.history(), "");
        assert_eq!(item.area_path(), "");
        assert_eq!(item.description(), Description::Empty);
    }

    #[test]
    fn typed_setters_use_reference_names() {
        let mut item = WorkItem::new(3);
        item.set_title("Login works");
        item.set_area_path(r"ProjB\Web");
        item.set_description(&Description::Rich(json!({"steps": 2})));

        assert_eq!(item.field(fields::TITLE), Some(&json!("Login works")));
        assert_eq!(item.area_path(), r"ProjB\Web");
        assert_eq!(item.description(), Description::Rich(json!({"steps": 2})));
    }

    #[test]
    fn deserializes_tagged_links() {
        let item: WorkItem = serde_json::from_value(json!({
            "id": 42,
            "links": [
                {"kind": "related", "target_id": 7, "link_type_end": "Related", "comment": "TF237027 copied"},
                {"kind": "hyperlink", "location": "https://example.test"}
            ]
        }))
        .unwrap();

        assert_eq!(item.rev, 0);
        assert_eq!(item.links.len(), 2);
        assert_eq!(item.links[0].kind(), "related");
        assert_eq!(item.links[0].comment(), "TF237027 copied");
        assert_eq!(item.links[1].comment(), "");
    }
}
