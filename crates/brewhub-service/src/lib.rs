//! # brewhub-service
//!
//! Business logic for recipe versioning. Services receive their store
//! handles at construction time as `Arc<dyn ...>` trait objects and take a
//! [`RequestContext`] identifying the acting user on every call.
//!
//! - `version::allocator` computes the next main or branch identifier.
//! - `version::diff` produces change records between two recipe states.
//! - `version::policy` decides whether a write is legal.
//! - `version::history` groups snapshots into a display tree.
//! - [`VersionService`] and [`RecipeService`] orchestrate the above.

pub mod context;
pub mod recipe;
pub mod version;

pub use context::RequestContext;
pub use recipe::RecipeService;
pub use version::{VersionAllocator, VersionService};
