//! Route definitions for the BrewHub HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::Router;
use axum::routing::{get, post};

use crate::handlers;
use crate::state::AppState;

/// Build the API routes without middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(recipe_routes())
        .merge(version_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Recipe lifecycle endpoints
fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/recipes",
            get(handlers::recipe::list_recipes).post(handlers::recipe::create_recipe),
        )
        .route("/recipes/copy", post(handlers::recipe::copy_recipe))
        .route(
            "/recipes/{id}",
            get(handlers::recipe::get_recipe)
                .put(handlers::recipe::update_recipe)
                .delete(handlers::recipe::archive_recipe),
        )
}

/// Version tree endpoints
fn version_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes/{id}/versions", get(handlers::version::list_versions))
        .route("/recipes/{id}/version", post(handlers::version::create_version))
        .route("/recipes/{id}/branch", post(handlers::version::create_branch))
        .route(
            "/recipes/{id}/version/{version}/isCurrent",
            get(handlers::version::is_current),
        )
}

/// Liveness and store health
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
