use axum::{
    Json, Router,
    extract::{OriginalUri, Path, Query, State},
    http::{HeaderValue, StatusCode, header},
    middleware,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use once_cell::sync::Lazy;
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::api::models::{
    ApiError, ErrorResponse, HealthResponse, ListUsersResponse, ServiceStatuses, UserEnvelope,
    UserPayload,
};
use crate::api::openapi::ApiDoc;
use crate::config::CONFIG;
use crate::metrics;
use crate::models::User;
use crate::query::ListQuery;
use crate::rate_limit::{self, RateLimiter};
use crate::service::RosterService;
use crate::store::in_memory::InMemoryStore;

pub type SharedService = Arc<RosterService<InMemoryStore>>;

static STARTED_AT: Lazy<Instant> = Lazy::new(Instant::now);

/// The complete application router: API routes under `/api`, liveness and
/// metrics endpoints, and the SPA static fallback for everything else.
pub fn app(service: SharedService) -> Router {
    // Pin the uptime baseline to router construction, not the first probe.
    Lazy::force(&STARTED_AT);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/metrics", get(metrics_exposition))
        .nest("/api", api_routes(service))
        .fallback_service(static_assets())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors_layer())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(TraceLayer::new_for_http())
        .route_layer(middleware::from_fn(metrics::track))
}

/// API routes with the rate limiter in front; unknown `/api` paths answer
/// with a JSON 404 instead of the SPA fallback.
pub fn api_routes(service: SharedService) -> Router {
    let limiter = Arc::new(RateLimiter::new(
        Duration::from_millis(CONFIG.rate_limit_window_ms),
        CONFIG.rate_limit_max_requests,
    ));

    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/docs", get(api_docs))
        .fallback(api_not_found)
        .route_layer(middleware::from_fn_with_state(limiter, rate_limit::limit))
        .with_state(service)
}

fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = CONFIG
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PUT,
            http::Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

fn static_assets() -> ServeDir<tower_http::set_status::SetStatus<ServeFile>> {
    let dir = std::path::Path::new(&CONFIG.static_dir);
    ServeDir::new(dir).not_found_service(ServeFile::new(dir.join("index.html")))
}

pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to Roster",
        "description": "Mock user directory API with frontend SPA serving",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now(),
        "environment": CONFIG.environment,
        "endpoints": {
            "health": "/health",
            "metrics": "/metrics",
            "users": "/api/users",
            "docs": "/api/docs"
        }
    }))
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Liveness envelope", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        uptime: STARTED_AT.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: CONFIG.environment.clone(),
        services: ServiceStatuses::mocked(),
    })
}

pub async fn metrics_exposition() -> Result<impl IntoResponse, ApiError> {
    let body = metrics::render()?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    ))
}

pub async fn api_docs() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub async fn api_not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not Found".to_string(),
            message: format!("Route {} not found", uri.path()),
            fields: None,
        }),
    )
}

#[utoipa::path(
    get,
    path = "/api/users",
    params(ListQuery),
    responses((status = 200, description = "Paged user listing", body = ListUsersResponse))
)]
pub async fn list_users(
    State(service): State<SharedService>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListUsersResponse>, ApiError> {
    let (users, pagination) = service.list_users(&query).await?;
    Ok(Json(ListUsersResponse { users, pagination }))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "Id of the user to retrieve")),
    responses(
        (status = 200, description = "The user record", body = User),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(service): State<SharedService>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = service.get_user(&id).await?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = UserEnvelope),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(service): State<SharedService>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<UserEnvelope>), ApiError> {
    let user = service.create_user(payload.name, payload.email).await?;
    Ok((
        StatusCode::CREATED,
        Json(UserEnvelope {
            message: "User created successfully".to_string(),
            user,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "Id of the user to update")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = UserEnvelope),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(service): State<SharedService>,
    Path(id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserEnvelope>, ApiError> {
    let user = service.update_user(&id, payload.name, payload.email).await?;
    Ok(Json(UserEnvelope {
        message: "User updated successfully".to_string(),
        user,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "Id of the user to delete")),
    responses(
        (status = 200, description = "User deleted", body = UserEnvelope),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(service): State<SharedService>,
    Path(id): Path<String>,
) -> Result<Json<UserEnvelope>, ApiError> {
    let user = service.delete_user(&id).await?;
    Ok(Json(UserEnvelope {
        message: "User deleted successfully".to_string(),
        user,
    }))
}
