//! Token Auth API - username/password authentication with JWT bearer tokens.
//!
//! Register an account, exchange credentials for a signed access token, and
//! present that token to reach protected routes. Accounts live in a single
//! SQLite table; passwords are stored as bcrypt hashes.
//!
//! # Architecture Layers
//!
//! - **cli** / **commands**: `serve` and `migrate` subcommands
//! - **config**: environment-driven settings and constants
//! - **domain**: `User` and the bcrypt-backed `Password` value object
//! - **services**: registration, login, token verification
//! - **infra**: SeaORM connection, migrations, user repository
//! - **api**: axum routes, bearer-token middleware, extractors
//! - **errors**: `AppError` and its HTTP mapping
//!
//! # CLI Usage
//!
//! ```bash
//! cargo run -- serve --port 8000
//! cargo run -- migrate status
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

pub use api::AppState;
pub use config::Config;
pub use domain::{Password, User};
pub use errors::{AppError, AppResult};
