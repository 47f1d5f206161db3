//! Domain layer - the user account and its password.
//!
//! No infrastructure or HTTP concerns live here.

pub mod password;
pub mod user;

pub use password::Password;
pub use user::{User, UserResponse};
