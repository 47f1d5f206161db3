//! Authentication handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{ValidatedForm, ValidatedJson};
use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::TokenResponse;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Unique account name
    #[validate(length(
        min = 1,
        max = 64,
        message = "Username must be between 1 and 64 characters"
    ))]
    #[schema(example = "alice", min_length = 1, max_length = 64)]
    pub username: String,
    /// Account password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

/// OAuth2 password-grant form.
///
/// Other grant fields (`grant_type`, `scope`, `client_id`, ...) are accepted
/// and ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TokenRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "alice")]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/token", post(login))
}

/// Register a new user and receive an access token
#[utoipa::path(
    post,
    path = "/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = TokenResponse),
        (status = 400, description = "Validation error or username already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<TokenResponse>)> {
    let token = state
        .auth_service
        .register(payload.username, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(token)))
}

/// Exchange username and password for an access token
#[utoipa::path(
    post,
    path = "/token",
    tag = "Authentication",
    request_body(content = TokenRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Incorrect username or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedForm(payload): ValidatedForm<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .login(payload.username, payload.password)
        .await?;

    Ok(Json(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_limits() {
        let ok = RegisterRequest {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };
        assert!(ok.validate().is_ok());

        let empty_password = RegisterRequest {
            username: "alice".to_string(),
            password: String::new(),
        };
        assert!(empty_password.validate().is_err());

        let empty_username = RegisterRequest {
            username: String::new(),
            password: "secret".to_string(),
        };
        assert!(empty_username.validate().is_err());

        let long_username = RegisterRequest {
            username: "u".repeat(65),
            password: "secret".to_string(),
        };
        assert!(long_username.validate().is_err());
    }
}
