//! User service - read access to user accounts.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by username
    async fn get_user(&self, username: &str) -> AppResult<User>;
}

/// Concrete implementation of UserService over a user repository.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, username: &str) -> AppResult<User> {
        self.users.find_by_username(username).await?.ok_or_not_found()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::MockUserRepository;

    #[tokio::test]
    async fn test_get_user_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .withf(|username| username == "alice")
            .returning(|username| Ok(Some(User::new(username.to_string(), "hash".to_string()))));

        let service = UserManager::new(Arc::new(repo));
        let user = service.get_user("alice").await.unwrap();

        assert_eq!(user.username, "alice");
        assert_eq!(user.hashed_password, "hash");
    }

    #[tokio::test]
    async fn test_get_user_missing() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user("nobody").await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
