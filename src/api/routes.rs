//! Application route configuration.

use axum::{extract::State, http::StatusCode, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    auth_handler, booking_routes, bus_handler, cab_handler, flight_handler, hotel_handler,
    package_handler, trip_routes,
};
use super::middleware::{auth_middleware, rate_limit_auth_middleware, rate_limit_middleware};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no rate limiting)
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes(&state))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes(state: &AppState) -> Router<AppState> {
    // Authentication (stricter rate limiting)
    let auth = with_auth(
        state,
        auth_handler::public_routes(),
        auth_handler::protected_routes(),
    )
    .route_layer(middleware::from_fn_with_state(
        state.clone(),
        rate_limit_auth_middleware,
    ));

    Router::new()
        .nest("/auth", auth)
        .nest(
            "/bus",
            with_auth(state, bus_handler::public_routes(), bus_handler::protected_routes()),
        )
        .nest(
            "/flights",
            with_auth(
                state,
                flight_handler::public_routes(),
                flight_handler::protected_routes(),
            ),
        )
        .nest(
            "/hotels",
            with_auth(state, hotel_handler::public_routes(), hotel_handler::protected_routes()),
        )
        .nest(
            "/packages",
            with_auth(
                state,
                package_handler::public_routes(),
                package_handler::protected_routes(),
            ),
        )
        .nest(
            "/cabs",
            with_auth(state, cab_handler::public_routes(), cab_handler::protected_routes()),
        )
        .nest("/bookings", with_auth(state, Router::new(), booking_routes()))
        .nest("/trips", with_auth(state, Router::new(), trip_routes()))
}

/// Merge a public and a protected router under one prefix.
///
/// Only `protected` goes through the JWT check; both share the general
/// rate limit. Method routers on the same path are combined, so `GET /`
/// can stay public while `POST /` requires a token.
fn with_auth(
    state: &AppState,
    public: Router<AppState>,
    protected: Router<AppState>,
) -> Router<AppState> {
    public
        .merge(protected.route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        )))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
}

/// Root endpoint
async fn root() -> &'static str {
    "Voyago API is running"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    services: ServiceHealth,
}

/// Individual service health status
#[derive(Serialize)]
struct ServiceHealth {
    database: ServiceStatus,
    redis: ServiceStatus,
}

#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ServiceStatus {
    fn from_result<E: std::fmt::Display>(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self {
                status: "healthy",
                error: None,
            },
            Err(e) => Self {
                status: "unhealthy",
                error: Some(e.to_string()),
            },
        }
    }

    fn is_healthy(&self) -> bool {
        self.error.is_none()
    }
}

/// Health check endpoint with database and Redis connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = ServiceStatus::from_result(state.database.ping().await);
    let redis = ServiceStatus::from_result(state.cache.ping().await);

    let all_healthy = database.is_healthy() && redis.is_healthy();
    if !all_healthy {
        tracing::warn!(
            database = database.status,
            redis = redis.status,
            "Health check degraded"
        );
    }

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" },
        services: ServiceHealth { database, redis },
    };

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
