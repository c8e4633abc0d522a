//! Composite recipe view returned by read operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Recipe, RecipeData};
use crate::version::{ChangeRecord, VersionNumber, VersionSnapshot};

/// Metadata about the snapshot a view was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub version: VersionNumber,
    pub parent_version: Option<VersionNumber>,
    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub changes: Vec<ChangeRecord>,
}

/// Aggregate metadata merged with one snapshot's recipe data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeView {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub current_version: VersionNumber,
    pub current_version_created_at: DateTime<Utc>,
    pub original_recipe_id: Option<Uuid>,
    pub original_version: Option<VersionNumber>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// The version whose data is shown.
    pub version: VersionNumber,
    /// Whether `version` equals the current pointer.
    pub is_current: bool,
    #[serde(flatten)]
    pub data: RecipeData,
    pub version_info: VersionInfo,
}

impl RecipeView {
    /// Merge the aggregate with one of its snapshots.
    pub fn compose(recipe: &Recipe, snapshot: VersionSnapshot) -> Self {
        Self {
            id: recipe.id,
            owner_id: recipe.owner_id,
            current_version: recipe.current_version,
            current_version_created_at: recipe.current_version_created_at,
            original_recipe_id: recipe.original_recipe_id,
            original_version: recipe.original_version,
            is_archived: recipe.is_archived,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
            version: snapshot.version,
            is_current: snapshot.version == recipe.current_version,
            data: snapshot.recipe_data,
            version_info: VersionInfo {
                version: snapshot.version,
                parent_version: snapshot.parent_version,
                created_at: snapshot.created_at,
                created_by: snapshot.created_by,
                changes: snapshot.changes,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_flattens_data() {
        let owner = Uuid::new_v4();
        let now = Utc::now();
        let recipe = Recipe::new(owner, now);
        let snapshot = VersionSnapshot::new(
            recipe.id,
            VersionNumber::INITIAL,
            None,
            owner,
            now,
            vec![ChangeRecord::note("recipe", "Created recipe")],
            RecipeData::new("Chemex", 30.0),
        );

        let view = RecipeView::compose(&recipe, snapshot);
        assert!(view.is_current);

        let json = serde_json::to_value(&view).expect("serialize");
        assert_eq!(json["name"], "Chemex");
        assert_eq!(json["version"], "1.0");
        assert_eq!(json["isCurrent"], true);
        assert_eq!(json["versionInfo"]["parentVersion"], serde_json::Value::Null);
        assert_eq!(json["versionInfo"]["changes"][0]["description"], "Created recipe");
    }
}
