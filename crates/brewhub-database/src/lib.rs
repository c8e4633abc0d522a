//! # brewhub-database
//!
//! Storage for recipe aggregates and their version snapshots. Services talk
//! to the [`RecipeStore`] and [`VersionStore`] traits; PostgreSQL
//! repositories back production and a `dashmap` store backs tests and
//! single-node development.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;
pub mod traits;

pub use connection::DatabasePool;
pub use store::Stores;
pub use traits::{CommitOutcome, RecipeStore, VersionStore};
