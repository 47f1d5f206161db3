//! User repository backed by the `users` table.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, SqlErr};

use super::entities::user::{ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Check whether a username is already registered
    async fn exists(&self, username: &str) -> AppResult<bool>;

    /// Insert a new user. Fails with `UsernameTaken` on a duplicate key.
    async fn create(&self, username: String, hashed_password: String) -> AppResult<User>;
}

/// SeaORM implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(username.to_owned())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn exists(&self, username: &str) -> AppResult<bool> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    async fn create(&self, username: String, hashed_password: String) -> AppResult<User> {
        let active_model = ActiveModel {
            username: Set(username),
            hashed_password: Set(hashed_password),
        };

        let model = active_model.insert(&self.db).await.map_err(map_insert_error)?;
        Ok(User::from(model))
    }
}

/// The primary key settles concurrent registrations of the same username.
fn map_insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::UsernameTaken,
        _ => AppError::Database(err),
    }
}
