//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewUser, User};
use crate::errors::AppResult;
use crate::infra::UserStore;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a user; returns it together with every stored user
    async fn register(&self, input: NewUser) -> AppResult<(User, Vec<User>)>;

    /// Users whose membership flag equals `is_member`, in insertion order
    async fn list_by_membership(&self, is_member: bool) -> AppResult<Vec<User>>;

    /// Number of stored users
    async fn count(&self) -> AppResult<usize>;
}

/// Concrete implementation of UserService over a user store.
pub struct UserManager {
    store: Arc<dyn UserStore>,
}

impl UserManager {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn register(&self, input: NewUser) -> AppResult<(User, Vec<User>)> {
        let (user, users) = self.store.insert_user(input).await?;
        tracing::info!(login = %user.login, total = users.len(), "User created");
        Ok((user, users))
    }

    async fn list_by_membership(&self, is_member: bool) -> AppResult<Vec<User>> {
        let users = self.store.list_users().await?;
        Ok(users
            .into_iter()
            .filter(|user| user.is_member == is_member)
            .collect())
    }

    async fn count(&self) -> AppResult<usize> {
        self.store.count_users().await
    }
}
