//! Shared application state passed to all handlers via Axum's `State` extractor.

use std::sync::Arc;

use brewhub_auth::JwtDecoder;
use brewhub_core::config::AppConfig;
use brewhub_database::Stores;
use brewhub_service::{RecipeService, VersionService};

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Store handles, kept for health checks.
    pub stores: Stores,
    /// Recipe lifecycle and composite reads.
    pub recipe_service: Arc<RecipeService>,
    /// Main versions, branches, and history.
    pub version_service: Arc<VersionService>,
    /// Bearer token validation.
    pub jwt_decoder: Arc<JwtDecoder>,
}

impl AppState {
    /// Wire services over the given stores.
    pub fn new(config: AppConfig, stores: Stores) -> Self {
        let recipe_service = RecipeService::new(
            Arc::clone(&stores.recipes),
            Arc::clone(&stores.versions),
        );
        let version_service = VersionService::new(
            Arc::clone(&stores.recipes),
            Arc::clone(&stores.versions),
            &config.versioning,
        );
        let jwt_decoder = JwtDecoder::new(&config.auth);

        Self {
            config: Arc::new(config),
            stores,
            recipe_service: Arc::new(recipe_service),
            version_service: Arc::new(version_service),
            jwt_decoder: Arc::new(jwt_decoder),
        }
    }
}
