//! Convenience result type alias for BrewHub.

use crate::error::AppError;

/// A specialized `Result` type for BrewHub operations.
pub type AppResult<T> = Result<T, AppError>;
