//! Next-identifier computation for main and branch versions.
//!
//! Allocation reads the current maximum and proposes the next identifier
//! without taking a lock. Two concurrent writers can therefore propose the
//! same identifier; the store's uniqueness constraint rejects the loser
//! with an allocation conflict and the caller allocates again.

use std::sync::Arc;

use uuid::Uuid;

use brewhub_core::error::AppError;
use brewhub_core::result::AppResult;
use brewhub_database::VersionStore;
use brewhub_entity::version::VersionNumber;

/// The main version following the highest existing major.
pub fn next_main(max_major: Option<u32>) -> AppResult<VersionNumber> {
    match max_major {
        None => Ok(VersionNumber::INITIAL),
        Some(major) => major
            .checked_add(1)
            .map(VersionNumber::main)
            .ok_or_else(|| AppError::validation("Major version space exhausted")),
    }
}

/// The branch following the highest existing minor under `parent`'s major.
pub fn next_branch(parent: VersionNumber, max_minor: Option<u32>) -> AppResult<VersionNumber> {
    max_minor
        .unwrap_or(0)
        .checked_add(1)
        .map(|minor| VersionNumber::new(parent.major(), minor))
        .ok_or_else(|| {
            AppError::validation(format!(
                "Branch space under major {} exhausted",
                parent.major()
            ))
        })
}

/// Store-backed allocator.
#[derive(Debug, Clone)]
pub struct VersionAllocator {
    versions: Arc<dyn VersionStore>,
}

impl VersionAllocator {
    /// Creates a new allocator over the version store.
    pub fn new(versions: Arc<dyn VersionStore>) -> Self {
        Self { versions }
    }

    /// `{max major + 1}.0`, or `1.0` for a recipe with no snapshots.
    pub async fn allocate_main(&self, recipe_id: Uuid) -> AppResult<VersionNumber> {
        next_main(self.versions.max_major(recipe_id).await?)
    }

    /// `{parent major}.{max minor + 1}`.
    pub async fn allocate_branch(
        &self,
        recipe_id: Uuid,
        parent: VersionNumber,
    ) -> AppResult<VersionNumber> {
        next_branch(
            parent,
            self.versions.max_minor(recipe_id, parent.major()).await?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_main_is_initial() {
        assert_eq!(next_main(None).unwrap(), VersionNumber::INITIAL);
    }

    #[test]
    fn test_main_after_nine_is_ten() {
        assert_eq!(next_main(Some(9)).unwrap().to_string(), "10.0");
    }

    #[test]
    fn test_branch_numbering() {
        let parent = VersionNumber::INITIAL;
        assert_eq!(next_branch(parent, Some(0)).unwrap().to_string(), "1.1");
        assert_eq!(next_branch(parent, Some(1)).unwrap().to_string(), "1.2");
        // A branch off 1.1 still lands after the highest minor under major 1.
        let off_branch = VersionNumber::new(1, 1);
        assert_eq!(next_branch(off_branch, Some(2)).unwrap().to_string(), "1.3");
    }

    #[test]
    fn test_overflow_is_rejected() {
        assert!(next_main(Some(u32::MAX)).is_err());
        assert!(next_branch(VersionNumber::main(3), Some(u32::MAX)).is_err());
    }
}
