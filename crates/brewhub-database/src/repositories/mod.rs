//! PostgreSQL repository implementations.

pub mod recipe;
pub mod version;

pub use recipe::RecipeRepository;
pub use version::VersionRepository;

use brewhub_core::error::{AppError, ErrorKind};

/// Unique constraint on `(recipe_id, version)`; the allocation backstop.
pub(crate) const VERSION_UNIQUE_CONSTRAINT: &str = "recipe_versions_recipe_id_version_key";

/// Convert a nullable `BIGINT` aggregate into a version component.
pub(crate) fn to_component(value: Option<i64>) -> Result<Option<u32>, AppError> {
    value
        .map(|v| {
            u32::try_from(v).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Version component {v} out of range"),
                    e,
                )
            })
        })
        .transpose()
}
