//! Backend selection for the recipe and version stores.

use std::sync::Arc;

use tracing::info;

use brewhub_core::config::{AppConfig, StoreBackend};
use brewhub_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::repositories::{RecipeRepository, VersionRepository};
use crate::traits::{RecipeStore, VersionStore};

/// The pair of store handles shared by every service.
#[derive(Debug, Clone)]
pub struct Stores {
    pub recipes: Arc<dyn RecipeStore>,
    pub versions: Arc<dyn VersionStore>,
    /// Present only for the PostgreSQL backend.
    pub pool: Option<DatabasePool>,
}

impl Stores {
    /// PostgreSQL repositories over an existing pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        Self {
            recipes: Arc::new(RecipeRepository::new(pool.pool().clone())),
            versions: Arc::new(VersionRepository::new(pool.pool().clone())),
            pool: Some(pool),
        }
    }

    /// Both traits served by one in-memory store.
    pub fn memory(store: MemoryStore) -> Self {
        Self {
            recipes: Arc::new(store.clone()),
            versions: Arc::new(store),
            pool: None,
        }
    }

    /// Build the backend named by `store.backend`.
    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        match config.store.backend {
            StoreBackend::Postgres => {
                let pool = DatabasePool::connect(&config.database).await?;
                info!(backend = "postgres", "Recipe store ready");
                Ok(Self::postgres(pool))
            }
            StoreBackend::Memory => {
                info!(backend = "memory", "Recipe store ready");
                Ok(Self::memory(MemoryStore::new()))
            }
        }
    }

    /// Whether the backing store is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.recipes.health_check().await
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
