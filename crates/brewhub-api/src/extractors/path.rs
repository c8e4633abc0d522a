//! Typed path extraction and version parameter helpers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use brewhub_core::error::AppError;
use brewhub_core::result::AppResult;
use brewhub_entity::version::VersionNumber;

use crate::error::ApiError;

/// Path parameters whose rejections use the standard JSON error body.
#[derive(Debug, Clone)]
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Parses a `major.minor` version identifier from a path or query value.
pub fn parse_version(s: &str) -> AppResult<VersionNumber> {
    s.parse()
}

/// Parses an optional version, treating an empty value as absent.
pub fn parse_optional_version(s: Option<&str>) -> AppResult<Option<VersionNumber>> {
    match s {
        None | Some("") => Ok(None),
        Some(v) => parse_version(v).map(Some),
    }
}
