//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use brewhub_entity::recipe::RecipeData;
use brewhub_entity::version::{ChangeRecord, VersionNumber};

/// Body of `POST /api/recipes`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    #[validate(nested)]
    pub recipe_data: RecipeData,
}

/// Body of `POST /api/recipes/{id}/version`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVersionRequest {
    #[validate(nested)]
    pub recipe_data: RecipeData,
    /// The version the edit was made against; must still be current.
    pub source_version: VersionNumber,
    /// Caller-supplied change log. Computed from a diff when empty.
    #[serde(default)]
    pub changes: Option<Vec<ChangeRecord>>,
}

/// Body of `POST /api/recipes/{id}/branch`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBranchRequest {
    /// Existing, non-current version to branch from.
    pub parent_version: VersionNumber,
    #[validate(nested)]
    pub recipe_data: RecipeData,
    #[serde(default)]
    pub changes: Option<Vec<ChangeRecord>>,
}

/// Body of `POST /api/recipes/copy`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CopyRecipeRequest {
    pub source_recipe_id: Uuid,
    pub source_version: VersionNumber,
}

/// Body of `PUT /api/recipes/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeRequest {
    #[validate(nested)]
    pub recipe_data: RecipeData,
    #[serde(default)]
    pub changes: Option<Vec<ChangeRecord>>,
}

/// Query string of `GET /api/recipes/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VersionQuery {
    /// Version to read; the current version when absent.
    pub version: Option<String>,
}
