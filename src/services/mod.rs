//! Application services layer - Use cases and business logic.
//!
//! Services depend on the `UserRepository` trait rather than on SeaORM, so
//! they can be exercised against mocks.

mod auth_service;
pub mod container;
mod user_service;

pub use container::{ServiceContainer, Services};

pub use auth_service::{generate_token, AuthService, Authenticator, Claims, TokenResponse};
pub use user_service::{UserManager, UserService};
