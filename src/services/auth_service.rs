//! Authentication service - registration, login and token verification.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::{Config, TOKEN_TYPE_BEARER};
use crate::domain::Password;
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Plain text hashed once at startup and verified against when a login names
/// an unknown user, so both paths pay for one bcrypt verification.
const TIMING_DUMMY_PASSWORD: &str = "timing-equalization-placeholder";

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Token response returned after registration or login
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "bearer")
    #[schema(example = "bearer")]
    pub token_type: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create an account and return a token for it
    async fn register(&self, username: String, password: String) -> AppResult<TokenResponse>;

    /// Exchange credentials for a token
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Sign a fresh access token for `username`.
pub fn generate_token(username: &str, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::minutes(config.access_token_expire_minutes);

    let claims = Claims {
        sub: username.to_owned(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
    })
}

/// Check signature and expiry. No leeway: a token dies the second it expires.
fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

/// Run bcrypt work off the async executor.
async fn run_blocking<F, T>(f: F) -> AppResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::internal(format!("Blocking task failed: {}", e)))
}

/// Concrete implementation of AuthService over a user repository.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    config: Config,
    dummy_password: Password,
}

impl Authenticator {
    /// Create new auth service instance.
    ///
    /// Hashes the timing dummy up front, so this costs one bcrypt round.
    pub fn new(users: Arc<dyn UserRepository>, config: Config) -> AppResult<Self> {
        let dummy_password = Password::new(TIMING_DUMMY_PASSWORD, config.bcrypt_cost)?;

        Ok(Self {
            users,
            config,
            dummy_password,
        })
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, username: String, password: String) -> AppResult<TokenResponse> {
        if self.users.exists(&username).await? {
            tracing::info!(%username, "Registration rejected: username taken");
            return Err(AppError::UsernameTaken);
        }

        let cost = self.config.bcrypt_cost;
        let hashed = run_blocking(move || Password::new(&password, cost)).await??;

        let user = self.users.create(username, hashed.into_string()).await?;
        tracing::info!(username = %user.username, "User registered");

        generate_token(&user.username, &self.config)
    }

    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse> {
        let user = self.users.find_by_username(&username).await?;

        // Unknown users are verified against the dummy hash so the response
        // time does not reveal which usernames exist.
        let stored = match &user {
            Some(user) => user.password(),
            None => self.dummy_password.clone(),
        };
        let password_valid = run_blocking(move || stored.verify(&password)).await?;

        match user {
            Some(user) if password_valid => {
                tracing::info!(username = %user.username, "User logged in");
                generate_token(&user.username, &self.config)
            }
            _ => {
                tracing::warn!(%username, "Failed login attempt");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }
}
