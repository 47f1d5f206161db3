//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use super::constants::{
    DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES, DEFAULT_BCRYPT_COST, DEFAULT_DATABASE_MAX_CONNECTIONS,
    DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEV_JWT_SECRET,
    MAX_BCRYPT_COST, MIN_BCRYPT_COST, MIN_JWT_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    jwt_secret: String,
    pub access_token_expire_minutes: i64,
    pub bcrypt_cost: u32,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("jwt_secret", &"[REDACTED]")
            .field("access_token_expire_minutes", &self.access_token_expire_minutes)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Build a configuration with default settings around the given
    /// database URL and signing secret.
    ///
    /// # Errors
    /// Returns a validation error if the secret is shorter than
    /// `MIN_JWT_SECRET_LENGTH`.
    pub fn new(database_url: impl Into<String>, jwt_secret: impl Into<String>) -> AppResult<Self> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::validation(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        Ok(Self {
            database_url: database_url.into(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            jwt_secret,
            access_token_expire_minutes: DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        })
    }

    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// Debug builds fall back to a development secret when `JWT_SECRET` is
    /// unset; release builds refuse to start without one.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                DEV_JWT_SECRET.to_string()
            }
            Err(_) => {
                return Err(AppError::validation(
                    "JWT_SECRET environment variable must be set in production",
                ))
            }
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let mut config = Self::new(database_url, jwt_secret)?;
        config.database_max_connections =
            parse_var("DATABASE_MAX_CONNECTIONS", DEFAULT_DATABASE_MAX_CONNECTIONS)?;
        config.access_token_expire_minutes = parse_var(
            "ACCESS_TOKEN_EXPIRE_MINUTES",
            DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES,
        )?;
        config.bcrypt_cost = parse_var("BCRYPT_COST", DEFAULT_BCRYPT_COST)?;
        config.server_host =
            env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string());
        config.server_port = parse_var("SERVER_PORT", DEFAULT_SERVER_PORT)?;

        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&config.bcrypt_cost) {
            return Err(AppError::validation(format!(
                "BCRYPT_COST must be between {} and {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST
            )));
        }

        Ok(config)
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Read an optional environment variable, failing loudly on garbage values.
fn parse_var<T: FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::validation(format!("{} has an invalid value: {}", name, raw))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_short_secret() {
        let result = Config::new("sqlite::memory:", "too-short");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_new_applies_defaults() {
        let config = Config::new("sqlite::memory:", DEV_JWT_SECRET).unwrap();

        assert_eq!(config.access_token_expire_minutes, 30);
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert_eq!(config.server_addr(), "0.0.0.0:8000");
        assert_eq!(config.jwt_secret_bytes(), DEV_JWT_SECRET.as_bytes());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::new("sqlite://secret-path.db", DEV_JWT_SECRET).unwrap();
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains(DEV_JWT_SECRET));
        assert!(!rendered.contains("secret-path"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
