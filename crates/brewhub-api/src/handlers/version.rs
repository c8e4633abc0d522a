//! Version handlers: history, main versions, branches, pointer check.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

use brewhub_entity::recipe::RecipeView;
use brewhub_entity::version::VersionHistory;

use crate::dto::request::{CreateBranchRequest, CreateVersionRequest};
use crate::dto::response::IsCurrentResponse;
use crate::error::ApiError;
use crate::extractors::path::parse_version;
use crate::extractors::{AuthUser, ValidatedJson, ValidatedPath};
use crate::state::AppState;

/// GET /api/recipes/{id}/versions
pub async fn list_versions(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<Json<VersionHistory>, ApiError> {
    let history = state.version_service.history(id).await?;
    Ok(Json(history))
}

/// POST /api/recipes/{id}/version
pub async fn create_version(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(req): ValidatedJson<CreateVersionRequest>,
) -> Result<(StatusCode, Json<RecipeView>), ApiError> {
    let view = state
        .version_service
        .create_main_version(&auth, id, req.source_version, req.recipe_data, req.changes)
        .await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// POST /api/recipes/{id}/branch
pub async fn create_branch(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(req): ValidatedJson<CreateBranchRequest>,
) -> Result<(StatusCode, Json<RecipeView>), ApiError> {
    let view = state
        .version_service
        .create_branch(&auth, id, req.parent_version, req.recipe_data, req.changes)
        .await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/recipes/{id}/version/{version}/isCurrent
pub async fn is_current(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedPath((id, version)): ValidatedPath<(Uuid, String)>,
) -> Result<Json<IsCurrentResponse>, ApiError> {
    let version = parse_version(&version)?;
    let is_current = state.version_service.is_current(id, version).await?;
    Ok(Json(IsCurrentResponse { is_current }))
}
