//! Immutable version snapshot entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{ChangeRecord, VersionNumber};
use crate::recipe::RecipeData;

/// A point-in-time copy of a recipe's data. Never modified after insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VersionSnapshot {
    pub id: Uuid,
    pub recipe_id: Uuid,
    /// Unique within the recipe.
    pub version: VersionNumber,
    /// The version a branch was derived from. `None` for main versions.
    pub parent_version: Option<VersionNumber>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    #[sqlx(json)]
    pub changes: Vec<ChangeRecord>,
    #[sqlx(json)]
    pub recipe_data: RecipeData,
}

impl VersionSnapshot {
    /// Build a snapshot stamped with a fresh id and the given time.
    pub fn new(
        recipe_id: Uuid,
        version: VersionNumber,
        parent_version: Option<VersionNumber>,
        created_by: Uuid,
        created_at: DateTime<Utc>,
        changes: Vec<ChangeRecord>,
        recipe_data: RecipeData,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipe_id,
            version,
            parent_version,
            created_by,
            created_at,
            changes,
            recipe_data,
        }
    }

    /// Whether this snapshot is a main version.
    pub fn is_main(&self) -> bool {
        self.version.is_main()
    }
}
