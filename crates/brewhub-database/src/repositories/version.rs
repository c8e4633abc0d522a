//! Version snapshot repository.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgExecutor, PgPool};
use tracing::debug;
use uuid::Uuid;

use brewhub_core::error::{AppError, ErrorKind};
use brewhub_core::result::AppResult;
use brewhub_entity::recipe::Recipe;
use brewhub_entity::version::{VersionNumber, VersionSnapshot};

use super::{VERSION_UNIQUE_CONSTRAINT, to_component};
use crate::traits::{CommitOutcome, VersionStore};

/// PostgreSQL-backed [`VersionStore`].
#[derive(Debug, Clone)]
pub struct VersionRepository {
    pool: PgPool,
}

impl VersionRepository {
    /// Create a new version repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Insert a snapshot row, mapping a duplicate identifier to an allocation
/// conflict.
async fn insert_snapshot<'e, E: PgExecutor<'e>>(
    executor: E,
    snapshot: &VersionSnapshot,
) -> AppResult<VersionSnapshot> {
    sqlx::query_as::<_, VersionSnapshot>(
        "INSERT INTO recipe_versions (id, recipe_id, version, parent_version, created_by, \
         created_at, changes, recipe_data) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
    )
    .bind(snapshot.id)
    .bind(snapshot.recipe_id)
    .bind(snapshot.version)
    .bind(snapshot.parent_version)
    .bind(snapshot.created_by)
    .bind(snapshot.created_at)
    .bind(Json(&snapshot.changes))
    .bind(Json(&snapshot.recipe_data))
    .fetch_one(executor)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some(VERSION_UNIQUE_CONSTRAINT) =>
        {
            AppError::allocation_conflict(format!(
                "Version {} of recipe {} already exists",
                snapshot.version, snapshot.recipe_id
            ))
        }
        _ => AppError::with_source(ErrorKind::Database, "Failed to store version", e),
    })
}

#[async_trait]
impl VersionStore for VersionRepository {
    async fn find_version(
        &self,
        recipe_id: Uuid,
        version: VersionNumber,
    ) -> AppResult<Option<VersionSnapshot>> {
        sqlx::query_as::<_, VersionSnapshot>(
            "SELECT * FROM recipe_versions WHERE recipe_id = $1 AND version = $2",
        )
        .bind(recipe_id)
        .bind(version)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find version", e))
    }

    async fn list_versions(&self, recipe_id: Uuid) -> AppResult<Vec<VersionSnapshot>> {
        sqlx::query_as::<_, VersionSnapshot>(
            "SELECT * FROM recipe_versions WHERE recipe_id = $1 ORDER BY major ASC, minor ASC",
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list versions", e))
    }

    async fn list_version_numbers(&self, recipe_id: Uuid) -> AppResult<Vec<VersionNumber>> {
        sqlx::query_scalar::<_, VersionNumber>(
            "SELECT version FROM recipe_versions WHERE recipe_id = $1 ORDER BY major ASC, minor ASC",
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list version numbers", e)
        })
    }

    async fn max_major(&self, recipe_id: Uuid) -> AppResult<Option<u32>> {
        let max: Option<i64> =
            sqlx::query_scalar("SELECT MAX(major) FROM recipe_versions WHERE recipe_id = $1")
                .bind(recipe_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to read max major", e)
                })?;
        to_component(max)
    }

    async fn max_minor(&self, recipe_id: Uuid, major: u32) -> AppResult<Option<u32>> {
        let max: Option<i64> = sqlx::query_scalar(
            "SELECT MAX(minor) FROM recipe_versions WHERE recipe_id = $1 AND major = $2",
        )
        .bind(recipe_id)
        .bind(i64::from(major))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to read max minor", e))?;
        to_component(max)
    }

    async fn insert_branch(&self, snapshot: &VersionSnapshot) -> AppResult<VersionSnapshot> {
        insert_snapshot(&self.pool, snapshot).await
    }

    async fn commit_main(
        &self,
        snapshot: &VersionSnapshot,
        expected: VersionNumber,
    ) -> AppResult<CommitOutcome> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        insert_snapshot(&mut *tx, snapshot).await?;

        let updated = sqlx::query_as::<_, Recipe>(
            "UPDATE recipes SET current_version = $2, current_version_created_at = $3, \
             updated_at = $3 WHERE id = $1 AND current_version = $4 RETURNING *",
        )
        .bind(snapshot.recipe_id)
        .bind(snapshot.version)
        .bind(snapshot.created_at)
        .bind(expected)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to move pointer", e))?;

        match updated {
            Some(recipe) => {
                tx.commit().await.map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to commit version", e)
                })?;
                Ok(CommitOutcome::Committed(recipe))
            }
            None => {
                debug!(
                    recipe_id = %snapshot.recipe_id,
                    expected = %expected,
                    "Pointer moved before commit, rolling back"
                );
                tx.rollback().await.map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to roll back version", e)
                })?;
                Ok(CommitOutcome::PointerMoved)
            }
        }
    }
}
