//! Recipe lifecycle handlers: create, list, read, legacy update, archive, copy.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use brewhub_core::types::PageResponse;
use brewhub_entity::recipe::RecipeView;

use crate::dto::request::{
    CopyRecipeRequest, CreateRecipeRequest, UpdateRecipeRequest, VersionQuery,
};
use crate::dto::response::ArchiveResponse;
use crate::error::ApiError;
use crate::extractors::path::parse_optional_version;
use crate::extractors::{AuthUser, PaginationParams, ValidatedJson, ValidatedPath};
use crate::state::AppState;

/// POST /api/recipes
pub async fn create_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeView>), ApiError> {
    let view = state.recipe_service.create(&auth, req.recipe_data).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/recipes?owner=&page=&page_size=
pub async fn list_recipes(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PageResponse<RecipeView>>, ApiError> {
    let page = state
        .recipe_service
        .list(params.owner, &params.page_request())
        .await?;
    Ok(Json(page))
}

/// GET /api/recipes/{id}?version=
pub async fn get_recipe(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
    Query(query): Query<VersionQuery>,
) -> Result<Json<RecipeView>, ApiError> {
    let version = parse_optional_version(query.version.as_deref())?;
    let view = state.recipe_service.get(id, version).await?;
    Ok(Json(view))
}

/// PUT /api/recipes/{id}
pub async fn update_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateRecipeRequest>,
) -> Result<Json<RecipeView>, ApiError> {
    let view = state
        .version_service
        .update_recipe(&auth, id, req.recipe_data, req.changes)
        .await?;
    Ok(Json(view))
}

/// DELETE /api/recipes/{id}
pub async fn archive_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<Json<ArchiveResponse>, ApiError> {
    let recipe = state.recipe_service.archive(&auth, id).await?;
    Ok(Json(recipe.into()))
}

/// POST /api/recipes/copy
pub async fn copy_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CopyRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeView>), ApiError> {
    let view = state
        .recipe_service
        .copy(&auth, req.source_recipe_id, req.source_version)
        .await?;
    Ok((StatusCode::CREATED, Json(view)))
}
