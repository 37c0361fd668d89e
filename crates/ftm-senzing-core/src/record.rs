use serde::{Deserialize, Serialize};

use crate::property::{self, Properties};

/// One `FollowTheMoney` entity or relationship record as it appears on a JSONL line.
///
/// Relationship records share this shape; their `properties` carry the IDs of
/// the entities they connect. `schema` is optional because some exports emit
/// identifier records without a usable type tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FtmRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub properties: Properties,
}

impl FtmRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            schema: Some(schema.into()),
            properties: Properties::new(),
        }
    }

    /// Appends plain string values under `key`, creating the list if needed.
    #[must_use]
    pub fn with_values<I, S>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self
            .properties
            .entry(key.to_string())
            .or_insert_with(|| serde_json::Value::Array(Vec::new()));
        if let serde_json::Value::Array(list) = entry {
            list.extend(values.into_iter().map(|v| serde_json::Value::String(v.into())));
        }
        self
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref().filter(|s| !s.is_empty())
    }

    pub fn single(&self, key: &str) -> Option<&str> {
        property::extract_single(&self.properties, key)
    }

    pub fn present(&self, key: &str) -> Option<&str> {
        property::extract_present(&self.properties, key)
    }

    pub fn multiple(&self, key: &str) -> Vec<&str> {
        property::extract_multiple(&self.properties, key)
    }

    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }
}
