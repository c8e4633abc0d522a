//! Storage traits for recipe aggregates and version snapshots.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use brewhub_core::result::AppResult;
use brewhub_core::types::{PageRequest, PageResponse};
use brewhub_entity::recipe::Recipe;
use brewhub_entity::version::{VersionNumber, VersionSnapshot};

/// Result of an attempt to append a main version and advance the pointer.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// Snapshot stored and pointer advanced. Carries the updated aggregate.
    Committed(Recipe),
    /// The pointer no longer matched the expected version. Nothing was stored.
    PointerMoved,
}

/// Storage for the mutable recipe aggregate.
#[async_trait]
pub trait RecipeStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a recipe by ID, archived or not.
    async fn find_recipe(&self, id: Uuid) -> AppResult<Option<Recipe>>;

    /// Insert a recipe together with its first snapshot. Either both are
    /// stored or neither is.
    async fn create_recipe(&self, recipe: &Recipe, initial: &VersionSnapshot) -> AppResult<Recipe>;

    /// List non-archived recipes, most recently versioned first.
    async fn list_recipes(
        &self,
        owner_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Recipe>>;

    /// Set the archived flag. Returns `None` if the recipe does not exist.
    async fn set_archived(
        &self,
        id: Uuid,
        archived: bool,
        at: DateTime<Utc>,
    ) -> AppResult<Option<Recipe>>;

    /// Whether the backing store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Append-only storage for version snapshots.
#[async_trait]
pub trait VersionStore: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch one snapshot.
    async fn find_version(
        &self,
        recipe_id: Uuid,
        version: VersionNumber,
    ) -> AppResult<Option<VersionSnapshot>>;

    /// All snapshots of a recipe in ascending numeric version order.
    async fn list_versions(&self, recipe_id: Uuid) -> AppResult<Vec<VersionSnapshot>>;

    /// All version identifiers of a recipe in ascending numeric order.
    async fn list_version_numbers(&self, recipe_id: Uuid) -> AppResult<Vec<VersionNumber>>;

    /// Highest major number among the recipe's snapshots.
    async fn max_major(&self, recipe_id: Uuid) -> AppResult<Option<u32>>;

    /// Highest minor number under `major`, counting the main version as `0`.
    async fn max_minor(&self, recipe_id: Uuid, major: u32) -> AppResult<Option<u32>>;

    /// Append a branch snapshot. Fails with an allocation conflict if the
    /// identifier is already taken.
    async fn insert_branch(&self, snapshot: &VersionSnapshot) -> AppResult<VersionSnapshot>;

    /// Append a main-version snapshot and move the pointer from `expected`
    /// to it in one atomic step. Fails with an allocation conflict if the
    /// identifier is already taken.
    async fn commit_main(
        &self,
        snapshot: &VersionSnapshot,
        expected: VersionNumber,
    ) -> AppResult<CommitOutcome>;
}
