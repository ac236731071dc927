//! Application state - Dependency injection container.
//!
//! Owns the services (and through them the store) for the lifetime of the
//! server; cloned cheaply into every handler.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::MemoryStore;
use crate::services::{RepositoryManager, RepositoryService, UserManager, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Repository service
    pub repository_service: Arc<dyn RepositoryService>,
    /// Access settings and limits
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state backed by a fresh in-memory store.
    pub fn from_config(config: Config) -> Self {
        let store = Arc::new(MemoryStore::new());

        Self {
            user_service: Arc::new(UserManager::new(store.clone())),
            repository_service: Arc::new(RepositoryManager::new(store)),
            config: Arc::new(config),
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        user_service: Arc<dyn UserService>,
        repository_service: Arc<dyn RepositoryService>,
        config: Config,
    ) -> Self {
        Self {
            user_service,
            repository_service,
            config: Arc::new(config),
        }
    }
}
