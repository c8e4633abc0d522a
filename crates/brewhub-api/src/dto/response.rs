//! Response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use brewhub_entity::recipe::Recipe;
use brewhub_entity::version::VersionNumber;

/// Answer of the pointer check endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsCurrentResponse {
    pub is_current: bool,
}

/// Result of archiving a recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveResponse {
    pub id: Uuid,
    pub is_archived: bool,
    pub current_version: VersionNumber,
}

impl From<Recipe> for ArchiveResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            is_archived: recipe.is_archived,
            current_version: recipe.current_version,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: `ok` or `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Store status: `connected` or `unavailable`.
    pub store: String,
}
