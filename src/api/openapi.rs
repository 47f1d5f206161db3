//! OpenAPI documentation served through Swagger UI.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, user_handler};
use crate::domain::UserResponse;
use crate::services::TokenResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Token Auth API",
        version = "0.1.0",
        description = "Username/password registration and JWT bearer authentication",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        auth_handler::register,
        auth_handler::login,
        user_handler::get_current_user,
    ),
    components(
        schemas(
            UserResponse,
            TokenResponse,
            auth_handler::RegisterRequest,
            auth_handler::TokenRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and token issuance"),
        (name = "Users", description = "Authenticated user profile")
    )
)]
pub struct ApiDoc;

/// Registers the JWT bearer security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /token"))
                        .build(),
                ),
            );
        }
    }
}
