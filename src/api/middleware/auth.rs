//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::User;
use crate::errors::AppError;

/// Authenticated user resolved from the bearer token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub user: User,
}

/// JWT authentication middleware.
///
/// Validates the bearer token, loads the account it names and injects a
/// [`CurrentUser`] into the request extensions. Every failure is a plain
/// 401 so callers cannot tell a bad signature from a deleted account.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = {
        let token = bearer_token(&request).ok_or(AppError::Unauthorized)?;
        state
            .auth_service
            .verify_token(token)
            .map_err(|_| AppError::Unauthorized)?
    };

    let user = match state.user_service.get_user(&claims.sub).await {
        Ok(user) => user,
        Err(AppError::NotFound) => return Err(AppError::Unauthorized),
        Err(e) => return Err(e),
    };

    request.extensions_mut().insert(CurrentUser { user });

    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
