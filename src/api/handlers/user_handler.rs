//! User handlers.

use axum::{extract::Extension, response::Json, routing::get, Router};

use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::UserResponse;

/// Create user routes (mounted behind the auth middleware)
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_current_user))
}

/// Get current authenticated user
#[utoipa::path(
    get,
    path = "/users/me",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user profile", body = UserResponse),
        (status = 401, description = "Missing, malformed or expired token")
    )
)]
pub async fn get_current_user(
    Extension(current_user): Extension<CurrentUser>,
) -> Json<UserResponse> {
    Json(UserResponse::from(current_user.user))
}
