//! Recipe aggregate repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use brewhub_core::error::{AppError, ErrorKind};
use brewhub_core::result::AppResult;
use brewhub_core::types::{PageRequest, PageResponse};
use brewhub_entity::recipe::Recipe;
use brewhub_entity::version::VersionSnapshot;

use crate::connection;
use crate::traits::RecipeStore;

/// PostgreSQL-backed [`RecipeStore`].
#[derive(Debug, Clone)]
pub struct RecipeRepository {
    pool: PgPool,
}

impl RecipeRepository {
    /// Create a new recipe repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeStore for RecipeRepository {
    async fn find_recipe(&self, id: Uuid) -> AppResult<Option<Recipe>> {
        sqlx::query_as::<_, Recipe>("SELECT * FROM recipes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find recipe", e))
    }

    async fn create_recipe(&self, recipe: &Recipe, initial: &VersionSnapshot) -> AppResult<Recipe> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let created = sqlx::query_as::<_, Recipe>(
            "INSERT INTO recipes (id, owner_id, current_version, current_version_created_at, \
             original_recipe_id, original_version, is_archived, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(recipe.id)
        .bind(recipe.owner_id)
        .bind(recipe.current_version)
        .bind(recipe.current_version_created_at)
        .bind(recipe.original_recipe_id)
        .bind(recipe.original_version)
        .bind(recipe.is_archived)
        .bind(recipe.created_at)
        .bind(recipe.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create recipe", e))?;

        sqlx::query(
            "INSERT INTO recipe_versions (id, recipe_id, version, parent_version, created_by, \
             created_at, changes, recipe_data) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(initial.id)
        .bind(initial.recipe_id)
        .bind(initial.version)
        .bind(initial.parent_version)
        .bind(initial.created_by)
        .bind(initial.created_at)
        .bind(Json(&initial.changes))
        .bind(Json(&initial.recipe_data))
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to store initial version", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit recipe creation", e)
        })?;

        Ok(created)
    }

    async fn list_recipes(
        &self,
        owner_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Recipe>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM recipes \
             WHERE NOT is_archived AND ($1::UUID IS NULL OR owner_id = $1)",
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count recipes", e))?;

        let recipes = sqlx::query_as::<_, Recipe>(
            "SELECT * FROM recipes \
             WHERE NOT is_archived AND ($1::UUID IS NULL OR owner_id = $1) \
             ORDER BY current_version_created_at DESC, id ASC LIMIT $2 OFFSET $3",
        )
        .bind(owner_id)
        .bind(i64::try_from(page.limit()).unwrap_or(i64::MAX))
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list recipes", e))?;

        Ok(PageResponse::new(recipes, page, total.max(0) as u64))
    }

    async fn set_archived(
        &self,
        id: Uuid,
        archived: bool,
        at: DateTime<Utc>,
    ) -> AppResult<Option<Recipe>> {
        sqlx::query_as::<_, Recipe>(
            "UPDATE recipes SET is_archived = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(archived)
        .bind(at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to archive recipe", e))
    }

    async fn health_check(&self) -> AppResult<bool> {
        connection::ping(&self.pool).await
    }
}
