//! # brewhub-api
//!
//! HTTP surface for the recipe versioning engine. Handlers are thin: they
//! extract the actor and the payload, call into `brewhub-service`, and
//! render the result or the mapped [`ApiError`](error::ApiError).

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
