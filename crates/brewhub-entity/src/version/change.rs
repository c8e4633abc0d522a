//! Change records attached to version snapshots.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One field-level difference between a parent snapshot and its child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    /// Dotted camelCase field path, e.g. `grindSize.steps`.
    pub field: String,
    #[serde(default)]
    pub old_value: Value,
    #[serde(default)]
    pub new_value: Value,
    /// Human-readable summary.
    pub description: String,
}

impl ChangeRecord {
    /// A record that carries only a description, such as `Created recipe`.
    pub fn note(field: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            old_value: Value::Null,
            new_value: Value::Null,
            description: description.into(),
        }
    }
}
