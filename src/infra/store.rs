//! In-memory store for users and repositories.
//!
//! Two append-only collections, each behind its own `RwLock`. An append and
//! the snapshot handed back to the caller happen under one write guard, so a
//! request always sees its own write.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{NewUser, Repository, User};
use crate::errors::AppResult;

#[cfg(test)]
use mockall::automock;

/// User collection trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Stamp and append a user; returns it with the collection after the append
    async fn insert_user(&self, input: NewUser) -> AppResult<(User, Vec<User>)>;

    /// All users in insertion order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Number of stored users
    async fn count_users(&self) -> AppResult<usize>;
}

/// Repository collection trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RepoStore: Send + Sync {
    /// Append a repository; returns the collection after the append
    async fn insert_repository(&self, repo: Repository) -> AppResult<Vec<Repository>>;

    /// All repositories in insertion order
    async fn list_repositories(&self) -> AppResult<Vec<Repository>>;

    /// Number of stored repositories
    async fn count_repositories(&self) -> AppResult<usize>;
}

/// Process-lifetime store backing both collections.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    repos: RwLock<Vec<Repository>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, input: NewUser) -> AppResult<(User, Vec<User>)> {
        let mut users = self.users.write().await;

        // created_at never runs backwards, even if the wall clock does
        let now = Utc::now();
        let created_at = users
            .last()
            .map_or(now, |last| last.created_at.max(now));

        let user = input.into_user(created_at);
        users.push(user.clone());
        Ok((user, users.clone()))
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn count_users(&self) -> AppResult<usize> {
        Ok(self.users.read().await.len())
    }
}

#[async_trait]
impl RepoStore for MemoryStore {
    async fn insert_repository(&self, repo: Repository) -> AppResult<Vec<Repository>> {
        let mut repos = self.repos.write().await;
        repos.push(repo);
        Ok(repos.clone())
    }

    async fn list_repositories(&self) -> AppResult<Vec<Repository>> {
        Ok(self.repos.read().await.clone())
    }

    async fn count_repositories(&self) -> AppResult<usize> {
        Ok(self.repos.read().await.len())
    }
}
