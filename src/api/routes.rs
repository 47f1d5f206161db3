//! Application route configuration.

use axum::{extract::State, http::StatusCode, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{auth_routes, user_routes};
use super::middleware::auth_middleware;
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public: /register, /token
        .merge(auth_routes())
        // Protected: require a valid bearer token
        .nest(
            "/users",
            user_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Token Auth API"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    services: ServiceHealth,
}

#[derive(Serialize)]
struct ServiceHealth {
    database: ServiceStatus,
}

#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    // Failure details stay in the logs, not the response body
    let healthy = match state.database.ping().await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);
            false
        }
    };

    let (status_code, response) = health_report(healthy);
    (status_code, Json(response))
}

fn health_report(database_healthy: bool) -> (StatusCode, HealthResponse) {
    let (status_code, status, database) = if database_healthy {
        (StatusCode::OK, "healthy", "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unhealthy")
    };

    let response = HealthResponse {
        status,
        services: ServiceHealth {
            database: ServiceStatus { status: database },
        },
    };

    (status_code, response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unhealthy_report_carries_only_status() {
        let (status_code, response) = health_report(false);

        assert_eq!(status_code, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "status": "degraded",
                "services": { "database": { "status": "unhealthy" } }
            })
        );
    }

    #[test]
    fn test_healthy_report() {
        let (status_code, response) = health_report(true);

        assert_eq!(status_code, StatusCode::OK);
        assert_eq!(response.services.database.status, "healthy");
    }
}
