//! Recipe creation, composite reads, copying, listing, and archiving.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use brewhub_core::result::AppResult;
use brewhub_core::types::{PageRequest, PageResponse};
use brewhub_database::{RecipeStore, VersionStore};
use brewhub_entity::recipe::{Recipe, RecipeData, RecipeView};
use brewhub_entity::version::{ChangeRecord, VersionNumber, VersionSnapshot};

use crate::context::RequestContext;
use crate::version::policy;
use crate::version::service::validate_data;

/// Manages the recipe aggregate outside of versioned edits.
#[derive(Debug, Clone)]
pub struct RecipeService {
    recipes: Arc<dyn RecipeStore>,
    versions: Arc<dyn VersionStore>,
}

impl RecipeService {
    /// Creates a new recipe service.
    pub fn new(recipes: Arc<dyn RecipeStore>, versions: Arc<dyn VersionStore>) -> Self {
        Self { recipes, versions }
    }

    /// Create a recipe owned by the actor, with `data` as version `1.0`.
    pub async fn create(&self, ctx: &RequestContext, data: RecipeData) -> AppResult<RecipeView> {
        validate_data(&data)?;
        let now = Utc::now();
        let recipe = Recipe::new(ctx.user_id, now);
        let initial = VersionSnapshot::new(
            recipe.id,
            VersionNumber::INITIAL,
            None,
            ctx.user_id,
            now,
            vec![ChangeRecord::note("recipe", "Created recipe")],
            data,
        );

        let created = self.recipes.create_recipe(&recipe, &initial).await?;

        info!(
            user_id = %ctx.user_id,
            recipe_id = %created.id,
            name = %initial.recipe_data.name,
            "Recipe created"
        );

        Ok(RecipeView::compose(&created, initial))
    }

    /// Composite view of `version`, or of the current version when `None`.
    /// A missing version yields NotFound with the current version and the
    /// available version list attached.
    pub async fn get(&self, recipe_id: Uuid, version: Option<VersionNumber>) -> AppResult<RecipeView> {
        let recipe = self.load_recipe(recipe_id).await?;
        let target = version.unwrap_or(recipe.current_version);

        match self.versions.find_version(recipe_id, target).await? {
            Some(snapshot) => Ok(RecipeView::compose(&recipe, snapshot)),
            None => {
                let available = self.versions.list_version_numbers(recipe_id).await?;
                Err(policy::version_not_found(
                    recipe_id,
                    target,
                    recipe.current_version,
                    &available,
                ))
            }
        }
    }

    /// Copy `source_version` of another recipe into a new recipe owned by
    /// the actor. The source is left untouched.
    pub async fn copy(
        &self,
        ctx: &RequestContext,
        source_recipe_id: Uuid,
        source_version: VersionNumber,
    ) -> AppResult<RecipeView> {
        let source = self.load_recipe(source_recipe_id).await?;
        let snapshot = match self
            .versions
            .find_version(source_recipe_id, source_version)
            .await?
        {
            Some(snapshot) => snapshot,
            None => {
                let available = self.versions.list_version_numbers(source_recipe_id).await?;
                return Err(policy::version_not_found(
                    source_recipe_id,
                    source_version,
                    source.current_version,
                    &available,
                ));
            }
        };

        let now = Utc::now();
        let recipe = Recipe::copied_from(ctx.user_id, source.id, source_version, now);
        let note = format!(
            "Copied from \"{}\" version {}",
            snapshot.recipe_data.name, source_version
        );
        let initial = VersionSnapshot::new(
            recipe.id,
            VersionNumber::INITIAL,
            None,
            ctx.user_id,
            now,
            vec![ChangeRecord::note("recipe", note)],
            snapshot.recipe_data,
        );

        let created = self.recipes.create_recipe(&recipe, &initial).await?;

        info!(
            user_id = %ctx.user_id,
            recipe_id = %created.id,
            source_recipe_id = %source_recipe_id,
            source_version = %source_version,
            "Recipe copied"
        );

        Ok(RecipeView::compose(&created, initial))
    }

    /// Non-archived recipes, most recently versioned first, each shown at
    /// its current version.
    pub async fn list(
        &self,
        owner_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<RecipeView>> {
        let recipes = self.recipes.list_recipes(owner_id, page).await?;

        let mut views = Vec::with_capacity(recipes.items.len());
        for recipe in &recipes.items {
            match self
                .versions
                .find_version(recipe.id, recipe.current_version)
                .await?
            {
                Some(snapshot) => views.push(RecipeView::compose(recipe, snapshot)),
                None => warn!(
                    recipe_id = %recipe.id,
                    current_version = %recipe.current_version,
                    "Current version snapshot missing, skipping recipe in listing"
                ),
            }
        }

        Ok(PageResponse {
            items: views,
            page: recipes.page,
            page_size: recipes.page_size,
            total_items: recipes.total_items,
            total_pages: recipes.total_pages,
        })
    }

    /// Archive a recipe. Owner only; archiving twice is a no-op.
    pub async fn archive(&self, ctx: &RequestContext, recipe_id: Uuid) -> AppResult<Recipe> {
        let recipe = self.load_recipe(recipe_id).await?;
        policy::require_owner(ctx, &recipe)?;

        if recipe.is_archived {
            return Ok(recipe);
        }

        let archived = self
            .recipes
            .set_archived(recipe_id, true, Utc::now())
            .await?
            .ok_or_else(|| policy::recipe_not_found(recipe_id))?;

        info!(user_id = %ctx.user_id, recipe_id = %recipe_id, "Recipe archived");
        Ok(archived)
    }

    async fn load_recipe(&self, recipe_id: Uuid) -> AppResult<Recipe> {
        self.recipes
            .find_recipe(recipe_id)
            .await?
            .ok_or_else(|| policy::recipe_not_found(recipe_id))
    }
}
