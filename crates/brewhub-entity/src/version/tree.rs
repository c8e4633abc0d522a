//! Version history tree structures for hierarchical display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ChangeRecord, VersionNumber};

/// A node in the version history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionNode {
    pub version: VersionNumber,
    pub parent_version: Option<VersionNumber>,
    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub changes: Vec<ChangeRecord>,
    /// Whether the recipe's current pointer is this version.
    pub is_current: bool,
    pub is_main_version: bool,
}

/// All versions sharing one major number, in ascending order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionGroup {
    pub major: u32,
    pub versions: Vec<VersionNode>,
}

/// The full version history of a recipe grouped by major number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionHistory {
    pub recipe_id: Uuid,
    pub current_version: VersionNumber,
    pub original_recipe_id: Option<Uuid>,
    pub original_version: Option<VersionNumber>,
    /// Groups ordered by ascending major number.
    pub groups: Vec<VersionGroup>,
    /// Total number of snapshots in the history.
    pub total_versions: u64,
}

impl VersionHistory {
    /// Iterate all nodes in ascending version order.
    pub fn nodes(&self) -> impl Iterator<Item = &VersionNode> {
        self.groups.iter().flat_map(|g| g.versions.iter())
    }

    /// Look up a group by major number.
    pub fn group(&self, major: u32) -> Option<&VersionGroup> {
        self.groups.iter().find(|g| g.major == major)
    }
}
