//! Recipe aggregate entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::version::VersionNumber;

/// The logical recipe. Holds ownership, the current-version pointer, and
/// copy provenance. Recipe content lives in version snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique recipe identifier.
    pub id: Uuid,
    /// The only actor allowed to create main versions.
    pub owner_id: Uuid,
    /// Pointer to the latest main version.
    pub current_version: VersionNumber,
    /// Creation time of the current version.
    pub current_version_created_at: DateTime<Utc>,
    /// Source recipe if this recipe was copied.
    pub original_recipe_id: Option<Uuid>,
    /// Source version if this recipe was copied.
    pub original_version: Option<VersionNumber>,
    /// Archived recipes are hidden from listings and reject owner writes.
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Build a fresh recipe pointing at version `1.0`.
    pub fn new(owner_id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            current_version: VersionNumber::INITIAL,
            current_version_created_at: created_at,
            original_recipe_id: None,
            original_version: None,
            is_archived: false,
            created_at,
            updated_at: created_at,
        }
    }

    /// Build a copy with provenance pointing back at the source.
    pub fn copied_from(
        owner_id: Uuid,
        source_id: Uuid,
        source_version: VersionNumber,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            original_recipe_id: Some(source_id),
            original_version: Some(source_version),
            ..Self::new(owner_id, created_at)
        }
    }

    /// Whether the given actor owns this recipe.
    pub fn is_owned_by(&self, actor_id: Uuid) -> bool {
        self.owner_id == actor_id
    }
}
