//! Core type definitions used across the BrewHub workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
