//! Repository service - Handles repository-related business logic.
//!
//! Repositories form one global collection. The owner login in the route
//! is only used for logging; it never scopes what is stored or listed.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Repository;
use crate::errors::AppResult;
use crate::infra::RepoStore;

/// Repository service trait for dependency injection.
#[async_trait]
pub trait RepositoryService: Send + Sync {
    /// Append a repository; returns every stored repository
    async fn create(&self, owner: &str, repo: Repository) -> AppResult<Vec<Repository>>;

    /// Every stored repository, in insertion order
    async fn list(&self) -> AppResult<Vec<Repository>>;

    /// Number of stored repositories
    async fn count(&self) -> AppResult<usize>;
}

/// Concrete implementation of RepositoryService over a repository store.
pub struct RepositoryManager {
    store: Arc<dyn RepoStore>,
}

impl RepositoryManager {
    pub fn new(store: Arc<dyn RepoStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RepositoryService for RepositoryManager {
    async fn create(&self, owner: &str, repo: Repository) -> AppResult<Vec<Repository>> {
        let name = repo.name.clone();
        let repos = self.store.insert_repository(repo).await?;
        tracing::info!(owner = %owner, repo = %name, total = repos.len(), "Repository created");
        Ok(repos)
    }

    async fn list(&self) -> AppResult<Vec<Repository>> {
        self.store.list_repositories().await
    }

    async fn count(&self) -> AppResult<usize> {
        self.store.count_repositories().await
    }
}
