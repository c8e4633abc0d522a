//! Version history tree reconstruction.

use std::collections::BTreeMap;

use brewhub_entity::recipe::Recipe;
use brewhub_entity::version::{VersionGroup, VersionHistory, VersionNode, VersionSnapshot};

/// Group snapshots by major number. Groups ascend by major; within a group
/// the main version comes first and branches follow by ascending minor.
pub fn build_history(recipe: &Recipe, snapshots: Vec<VersionSnapshot>) -> VersionHistory {
    let total_versions = snapshots.len() as u64;
    let mut by_major: BTreeMap<u32, Vec<VersionNode>> = BTreeMap::new();

    for snapshot in snapshots {
        let is_main_version = snapshot.is_main();
        let node = VersionNode {
            version: snapshot.version,
            parent_version: snapshot.parent_version,
            created_at: snapshot.created_at,
            created_by: snapshot.created_by,
            changes: snapshot.changes,
            is_current: snapshot.version == recipe.current_version,
            is_main_version,
        };
        by_major.entry(node.version.major()).or_default().push(node);
    }

    let groups = by_major
        .into_iter()
        .map(|(major, mut versions)| {
            versions.sort_by_key(|n| n.version.minor());
            VersionGroup { major, versions }
        })
        .collect();

    VersionHistory {
        recipe_id: recipe.id,
        current_version: recipe.current_version,
        original_recipe_id: recipe.original_recipe_id,
        original_version: recipe.original_version,
        groups,
        total_versions,
    }
}
