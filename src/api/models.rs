use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::error;
use utoipa::ToSchema;

use crate::config::CONFIG;
use crate::error::RosterError;
use crate::models::User;
use crate::query::Pagination;

/// Create/update request body. Fields are optional so missing ones reach the
/// validator and come back as per-field messages instead of a deserialization
/// failure.
#[derive(Deserialize, ToSchema)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ListUsersResponse {
    pub users: Vec<User>,
    pub pagination: Pagination,
}

#[derive(Serialize, ToSchema)]
pub struct UserEnvelope {
    pub message: String,
    pub user: User,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// Seconds since process start
    pub uptime: u64,
    pub version: String,
    pub environment: String,
    pub services: ServiceStatuses,
}

/// Mocked downstream statuses; there is no real database or cache behind them.
#[derive(Serialize, ToSchema)]
pub struct ServiceStatuses {
    pub database: String,
    pub cache: String,
    pub external_api: String,
}

impl ServiceStatuses {
    pub fn mocked() -> Self {
        ServiceStatuses {
            database: "connected".to_string(),
            cache: "connected".to_string(),
            external_api: "healthy".to_string(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<HashMap<String, String>>,
}

// Newtype wrapper for RosterError to implement IntoResponse
pub struct ApiError(pub RosterError);

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match &self.0 {
            RosterError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation error"),
            RosterError::EmailTaken(_) => (StatusCode::CONFLICT, "Conflict"),
            RosterError::UserNotFound(_) => (StatusCode::NOT_FOUND, "User not found"),
            RosterError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        };

        let fields = match &self.0 {
            RosterError::Validation(missing) => Some(
                missing
                    .iter()
                    .map(|field| (field.field.clone(), field.message.clone()))
                    .collect(),
            ),
            _ => None,
        };

        let message = match &self.0 {
            RosterError::Internal(detail) => {
                error!(%detail, "request failed unexpectedly");
                if CONFIG.is_development() {
                    detail.clone()
                } else {
                    "Something went wrong on our end".to_string()
                }
            }
            err => err.to_string(),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
                fields,
            }),
        )
            .into_response()
    }
}
