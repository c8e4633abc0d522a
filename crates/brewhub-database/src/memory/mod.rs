//! In-memory recipe and version store.
//!
//! Each recipe lineage (aggregate plus snapshots) lives in one `DashMap`
//! entry, so every write to a lineage runs under that entry's lock. This
//! makes the snapshot append and pointer move a single atomic step.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use brewhub_core::error::AppError;
use brewhub_core::result::AppResult;
use brewhub_core::types::{PageRequest, PageResponse};
use brewhub_entity::recipe::Recipe;
use brewhub_entity::version::{VersionNumber, VersionSnapshot};

use crate::traits::{CommitOutcome, RecipeStore, VersionStore};

/// One recipe and all of its snapshots.
#[derive(Debug, Clone)]
struct Lineage {
    recipe: Recipe,
    versions: BTreeMap<VersionNumber, VersionSnapshot>,
}

/// `dashmap`-backed implementation of both store traits.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    lineages: Arc<DashMap<Uuid, Lineage>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recipes held, archived included.
    pub fn recipe_count(&self) -> usize {
        self.lineages.len()
    }

    fn duplicate(snapshot: &VersionSnapshot) -> AppError {
        AppError::allocation_conflict(format!(
            "Version {} of recipe {} already exists",
            snapshot.version, snapshot.recipe_id
        ))
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn find_recipe(&self, id: Uuid) -> AppResult<Option<Recipe>> {
        Ok(self.lineages.get(&id).map(|l| l.recipe.clone()))
    }

    async fn create_recipe(&self, recipe: &Recipe, initial: &VersionSnapshot) -> AppResult<Recipe> {
        if initial.recipe_id != recipe.id || initial.version != recipe.current_version {
            return Err(AppError::internal(
                "Initial snapshot does not match the recipe pointer",
            ));
        }

        match self.lineages.entry(recipe.id) {
            Entry::Occupied(_) => Err(AppError::internal(format!(
                "Recipe {} already exists",
                recipe.id
            ))),
            Entry::Vacant(slot) => {
                let mut versions = BTreeMap::new();
                versions.insert(initial.version, initial.clone());
                slot.insert(Lineage {
                    recipe: recipe.clone(),
                    versions,
                });
                Ok(recipe.clone())
            }
        }
    }

    async fn list_recipes(
        &self,
        owner_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Recipe>> {
        let mut recipes: Vec<Recipe> = self
            .lineages
            .iter()
            .map(|entry| entry.recipe.clone())
            .filter(|r| !r.is_archived)
            .filter(|r| owner_id.is_none_or(|owner| r.owner_id == owner))
            .collect();

        recipes.sort_by(|a, b| {
            b.current_version_created_at
                .cmp(&a.current_version_created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        let total = recipes.len() as u64;
        let items = recipes
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .collect();

        Ok(PageResponse::new(items, page, total))
    }

    async fn set_archived(
        &self,
        id: Uuid,
        archived: bool,
        at: DateTime<Utc>,
    ) -> AppResult<Option<Recipe>> {
        Ok(self.lineages.get_mut(&id).map(|mut lineage| {
            lineage.recipe.is_archived = archived;
            lineage.recipe.updated_at = at;
            lineage.recipe.clone()
        }))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[async_trait]
impl VersionStore for MemoryStore {
    async fn find_version(
        &self,
        recipe_id: Uuid,
        version: VersionNumber,
    ) -> AppResult<Option<VersionSnapshot>> {
        Ok(self
            .lineages
            .get(&recipe_id)
            .and_then(|l| l.versions.get(&version).cloned()))
    }

    async fn list_versions(&self, recipe_id: Uuid) -> AppResult<Vec<VersionSnapshot>> {
        Ok(self
            .lineages
            .get(&recipe_id)
            .map(|l| l.versions.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn list_version_numbers(&self, recipe_id: Uuid) -> AppResult<Vec<VersionNumber>> {
        Ok(self
            .lineages
            .get(&recipe_id)
            .map(|l| l.versions.keys().copied().collect())
            .unwrap_or_default())
    }

    async fn max_major(&self, recipe_id: Uuid) -> AppResult<Option<u32>> {
        Ok(self
            .lineages
            .get(&recipe_id)
            .and_then(|l| l.versions.keys().next_back().map(VersionNumber::major)))
    }

    async fn max_minor(&self, recipe_id: Uuid, major: u32) -> AppResult<Option<u32>> {
        Ok(self.lineages.get(&recipe_id).and_then(|l| {
            l.versions
                .range(VersionNumber::main(major)..=VersionNumber::new(major, u32::MAX))
                .next_back()
                .map(|(v, _)| v.minor())
        }))
    }

    async fn insert_branch(&self, snapshot: &VersionSnapshot) -> AppResult<VersionSnapshot> {
        let mut lineage = self
            .lineages
            .get_mut(&snapshot.recipe_id)
            .ok_or_else(|| AppError::not_found(format!("Recipe {} not found", snapshot.recipe_id)))?;

        if lineage.versions.contains_key(&snapshot.version) {
            return Err(Self::duplicate(snapshot));
        }
        lineage.versions.insert(snapshot.version, snapshot.clone());
        Ok(snapshot.clone())
    }

    async fn commit_main(
        &self,
        snapshot: &VersionSnapshot,
        expected: VersionNumber,
    ) -> AppResult<CommitOutcome> {
        let mut lineage = self
            .lineages
            .get_mut(&snapshot.recipe_id)
            .ok_or_else(|| AppError::not_found(format!("Recipe {} not found", snapshot.recipe_id)))?;

        if lineage.versions.contains_key(&snapshot.version) {
            return Err(Self::duplicate(snapshot));
        }
        if lineage.recipe.current_version != expected {
            return Ok(CommitOutcome::PointerMoved);
        }

        lineage.versions.insert(snapshot.version, snapshot.clone());
        lineage.recipe.current_version = snapshot.version;
        lineage.recipe.current_version_created_at = snapshot.created_at;
        lineage.recipe.updated_at = snapshot.created_at;
        Ok(CommitOutcome::Committed(lineage.recipe.clone()))
    }
}
