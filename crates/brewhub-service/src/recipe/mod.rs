//! Recipe lifecycle: create, read, copy, list, archive.

pub mod service;

pub use service::RecipeService;
