//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Password;

/// User account: a unique username and its salted password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub hashed_password: String,
}

impl User {
    pub fn new(username: String, hashed_password: String) -> Self {
        Self {
            username,
            hashed_password,
        }
    }

    /// Stored hash as a verifiable password value object
    pub fn password(&self) -> Password {
        Password::from_hash(self.hashed_password.clone())
    }
}

/// Profile returned by the authenticated `/users/me` endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Account username
    #[schema(example = "alice")]
    pub username: String,
    /// bcrypt hash of the account password
    #[schema(example = "$2b$12$KIXQJb3bq8Nf1tXo7uJ5UeYkT0qM9Qe2vYl7Zp8C6hF3sT1uW4xGm")]
    pub hashed_password: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            hashed_password: user.hashed_password,
        }
    }
}
