//! # brewhub-core
//!
//! Core crate for BrewHub. Contains the unified error system,
//! configuration schemas, and pagination types shared by every other
//! crate in the workspace.
//!
//! This crate has **no** internal dependencies on other BrewHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
