//! Main-version, branch, and legacy-update orchestration.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use brewhub_core::config::VersioningConfig;
use brewhub_core::error::AppError;
use brewhub_core::result::AppResult;
use brewhub_database::{CommitOutcome, RecipeStore, VersionStore};
use brewhub_entity::recipe::{Recipe, RecipeData, RecipeView};
use brewhub_entity::version::{ChangeRecord, VersionHistory, VersionNumber, VersionSnapshot};

use super::allocator::VersionAllocator;
use super::{diff, history, policy};
use crate::context::RequestContext;

/// Creates main versions and branches, and answers history queries.
#[derive(Debug, Clone)]
pub struct VersionService {
    recipes: Arc<dyn RecipeStore>,
    versions: Arc<dyn VersionStore>,
    allocator: VersionAllocator,
    /// Extra allocation attempts after an allocation conflict.
    allocation_retries: u32,
}

impl VersionService {
    /// Creates a new version service.
    pub fn new(
        recipes: Arc<dyn RecipeStore>,
        versions: Arc<dyn VersionStore>,
        config: &VersioningConfig,
    ) -> Self {
        Self {
            allocator: VersionAllocator::new(Arc::clone(&versions)),
            recipes,
            versions,
            allocation_retries: config.allocation_retries,
        }
    }

    /// Append a new main version derived from `source_version` and move the
    /// pointer to it. `source_version` must be the current version.
    pub async fn create_main_version(
        &self,
        ctx: &RequestContext,
        recipe_id: Uuid,
        source_version: VersionNumber,
        data: RecipeData,
        changes: Option<Vec<ChangeRecord>>,
    ) -> AppResult<RecipeView> {
        validate_data(&data)?;
        let recipe = self.load_recipe(recipe_id).await?;
        policy::authorize_main(ctx, &recipe, source_version)?;

        let source = self.load_version(&recipe, source_version).await?;
        let changes = resolve_changes(changes, &source.recipe_data, &data);

        let mut attempt = 0;
        loop {
            let version = self.allocator.allocate_main(recipe_id).await?;
            let snapshot = VersionSnapshot::new(
                recipe_id,
                version,
                None,
                ctx.user_id,
                Utc::now(),
                changes.clone(),
                data.clone(),
            );

            match self.versions.commit_main(&snapshot, source_version).await {
                Ok(CommitOutcome::Committed(updated)) => {
                    info!(
                        user_id = %ctx.user_id,
                        recipe_id = %recipe_id,
                        version = %version,
                        source_version = %source_version,
                        changes = snapshot.changes.len(),
                        "Main version created"
                    );
                    return Ok(RecipeView::compose(&updated, snapshot));
                }
                Ok(CommitOutcome::PointerMoved) => {
                    let current = self.load_recipe(recipe_id).await?.current_version;
                    warn!(
                        recipe_id = %recipe_id,
                        source_version = %source_version,
                        current_version = %current,
                        "Pointer moved during main version creation"
                    );
                    return Err(policy::should_branch(current, source_version));
                }
                Err(e) if e.is_allocation_conflict() && attempt < self.allocation_retries => {
                    attempt += 1;
                    warn!(
                        recipe_id = %recipe_id,
                        version = %version,
                        attempt,
                        "Main version allocation conflict, retrying"
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Append a branch version under `parent_version`'s major. The pointer
    /// does not move. `parent_version` must exist and must not be current.
    pub async fn create_branch(
        &self,
        ctx: &RequestContext,
        recipe_id: Uuid,
        parent_version: VersionNumber,
        data: RecipeData,
        changes: Option<Vec<ChangeRecord>>,
    ) -> AppResult<RecipeView> {
        validate_data(&data)?;
        let recipe = self.load_recipe(recipe_id).await?;
        policy::authorize_branch(ctx, &recipe, parent_version)?;

        let parent = self.load_version(&recipe, parent_version).await?;
        let changes = resolve_changes(changes, &parent.recipe_data, &data);

        let mut attempt = 0;
        loop {
            let version = self
                .allocator
                .allocate_branch(recipe_id, parent_version)
                .await?;
            let snapshot = VersionSnapshot::new(
                recipe_id,
                version,
                Some(parent_version),
                ctx.user_id,
                Utc::now(),
                changes.clone(),
                data.clone(),
            );

            match self.versions.insert_branch(&snapshot).await {
                Ok(stored) => {
                    info!(
                        user_id = %ctx.user_id,
                        recipe_id = %recipe_id,
                        version = %version,
                        parent_version = %parent_version,
                        changes = stored.changes.len(),
                        "Branch version created"
                    );
                    return Ok(RecipeView::compose(&recipe, stored));
                }
                Err(e) if e.is_allocation_conflict() && attempt < self.allocation_retries => {
                    attempt += 1;
                    warn!(
                        recipe_id = %recipe_id,
                        version = %version,
                        attempt,
                        "Branch allocation conflict, retrying"
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Legacy edit: a main version derived from whatever is current.
    pub async fn update_recipe(
        &self,
        ctx: &RequestContext,
        recipe_id: Uuid,
        data: RecipeData,
        changes: Option<Vec<ChangeRecord>>,
    ) -> AppResult<RecipeView> {
        let recipe = self.load_recipe(recipe_id).await?;
        self.create_main_version(ctx, recipe_id, recipe.current_version, data, changes)
            .await
    }

    /// The recipe's full version tree.
    pub async fn history(&self, recipe_id: Uuid) -> AppResult<VersionHistory> {
        let recipe = self.load_recipe(recipe_id).await?;
        let snapshots = self.versions.list_versions(recipe_id).await?;
        Ok(history::build_history(&recipe, snapshots))
    }

    /// Whether `version` is the recipe's current version.
    pub async fn is_current(&self, recipe_id: Uuid, version: VersionNumber) -> AppResult<bool> {
        let recipe = self.load_recipe(recipe_id).await?;
        Ok(recipe.current_version == version)
    }

    async fn load_recipe(&self, recipe_id: Uuid) -> AppResult<Recipe> {
        self.recipes
            .find_recipe(recipe_id)
            .await?
            .ok_or_else(|| policy::recipe_not_found(recipe_id))
    }

    async fn load_version(
        &self,
        recipe: &Recipe,
        version: VersionNumber,
    ) -> AppResult<VersionSnapshot> {
        match self.versions.find_version(recipe.id, version).await? {
            Some(snapshot) => Ok(snapshot),
            None => {
                let available = self.versions.list_version_numbers(recipe.id).await?;
                Err(policy::version_not_found(
                    recipe.id,
                    version,
                    recipe.current_version,
                    &available,
                ))
            }
        }
    }
}

/// Client-supplied change records win when non-empty.
fn resolve_changes(
    supplied: Option<Vec<ChangeRecord>>,
    old: &RecipeData,
    new: &RecipeData,
) -> Vec<ChangeRecord> {
    match supplied {
        Some(changes) if !changes.is_empty() => changes,
        _ => diff::diff(old, new),
    }
}

/// Validate recipe data, flattening validator errors into one message.
pub(crate) fn validate_data(data: &RecipeData) -> AppResult<()> {
    data.validate()
        .map_err(|e| AppError::validation(format!("Invalid recipe data: {e}")))
}
