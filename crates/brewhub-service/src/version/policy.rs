//! Authorization and version-state rules for recipe writes.
//!
//! Owner-gated writes check, in order: ownership, archive state, then the
//! relation between the requested version and the current pointer.
//! Rejections carry machine-readable details so the caller can retry with
//! the other operation.

use uuid::Uuid;

use brewhub_core::error::AppError;
use brewhub_core::result::AppResult;
use brewhub_entity::recipe::Recipe;
use brewhub_entity::version::VersionNumber;

use crate::context::RequestContext;

/// Reject actors other than the owner.
pub fn require_owner(ctx: &RequestContext, recipe: &Recipe) -> AppResult<()> {
    if recipe.is_owned_by(ctx.user_id) {
        Ok(())
    } else {
        Err(AppError::forbidden(
            "Only the recipe owner can modify this recipe",
        ))
    }
}

/// Reject writes to archived recipes.
pub fn require_active(recipe: &Recipe) -> AppResult<()> {
    if recipe.is_archived {
        Err(AppError::validation(format!(
            "Recipe {} is archived and cannot be modified",
            recipe.id
        )))
    } else {
        Ok(())
    }
}

/// Ownership plus archive check shared by every owner-gated write.
pub fn authorize_write(ctx: &RequestContext, recipe: &Recipe) -> AppResult<()> {
    require_owner(ctx, recipe)?;
    require_active(recipe)
}

/// A main version may only be created from the current version.
pub fn authorize_main(
    ctx: &RequestContext,
    recipe: &Recipe,
    source: VersionNumber,
) -> AppResult<()> {
    authorize_write(ctx, recipe)?;
    if source != recipe.current_version {
        return Err(should_branch(recipe.current_version, source));
    }
    Ok(())
}

/// A branch may only be created from a non-current version.
pub fn authorize_branch(
    ctx: &RequestContext,
    recipe: &Recipe,
    parent: VersionNumber,
) -> AppResult<()> {
    authorize_write(ctx, recipe)?;
    if parent == recipe.current_version {
        return Err(AppError::policy_conflict(format!(
            "Version {parent} is the current version; create a main version instead"
        ))
        .with_detail("shouldUseMain", true)
        .with_detail("currentVersion", recipe.current_version.to_string()));
    }
    Ok(())
}

/// The rejection returned when a main version is requested from a stale
/// source, either at the policy check or at the pointer swap.
pub fn should_branch(current: VersionNumber, source: VersionNumber) -> AppError {
    AppError::policy_conflict(format!(
        "Version {source} is not the current version ({current}); create a branch instead"
    ))
    .with_detail("shouldBranch", true)
    .with_detail("currentVersion", current.to_string())
}

/// NotFound carrying the recovery context for a missing version.
pub fn version_not_found(
    recipe_id: Uuid,
    requested: VersionNumber,
    current: VersionNumber,
    available: &[VersionNumber],
) -> AppError {
    AppError::not_found(format!(
        "Version {requested} of recipe {recipe_id} not found"
    ))
    .with_detail("currentVersion", current.to_string())
    .with_detail(
        "availableVersions",
        available.iter().map(ToString::to_string).collect::<Vec<_>>(),
    )
}

/// NotFound for a missing recipe.
pub fn recipe_not_found(recipe_id: Uuid) -> AppError {
    AppError::not_found(format!("Recipe {recipe_id} not found"))
}
