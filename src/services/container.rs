//! Service Container - builds and hands out the application services.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{AuthService, Authenticator, UserManager, UserService};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{UserRepository, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create a service container from already-built services
    pub fn new(auth_service: Arc<dyn AuthService>, user_service: Arc<dyn UserService>) -> Self {
        Self {
            auth_service,
            user_service,
        }
    }

    /// Wire both services to one SeaORM-backed user repository
    pub fn from_connection(db: DatabaseConnection, config: Config) -> AppResult<Self> {
        let users: Arc<dyn UserRepository> = Arc::new(UserStore::new(db));
        let auth_service = Arc::new(Authenticator::new(users.clone(), config)?);
        let user_service = Arc::new(UserManager::new(users));

        Ok(Self::new(auth_service, user_service))
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}
