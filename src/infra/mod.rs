//! Infrastructure layer - SQLite storage through SeaORM.
//!
//! - Connection pool and migrations
//! - Repositories over the `users` table

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore};

#[cfg(test)]
pub use repositories::MockUserRepository;
