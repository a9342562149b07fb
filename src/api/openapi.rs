use utoipa::OpenApi;

use crate::{
    api::models::{
        ErrorResponse, HealthResponse, ListUsersResponse, ServiceStatuses, UserEnvelope,
        UserPayload,
    },
    models::User,
    query::Pagination,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::list_users,
        super::handlers::get_user,
        super::handlers::create_user,
        super::handlers::update_user,
        super::handlers::delete_user,
        super::handlers::health
    ),
    components(schemas(
        UserPayload,
        UserEnvelope,
        ListUsersResponse,
        ErrorResponse,
        HealthResponse,
        ServiceStatuses,
        User,
        Pagination
    )),
    info(
        title = "Roster API",
        description = "Mock user directory with pagination, search and health/metrics endpoints",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
