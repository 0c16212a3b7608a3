//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{circulation, health, items, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Circulation API",
        version = "0.1.0",
        description = "Borrow, return and hold queue management for a library catalogue"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Items
        items::list_items,
        items::get_item,
        items::queue_position,
        items::eligibility,
        // Circulation
        circulation::borrow,
        circulation::return_item,
        circulation::place_hold,
        circulation::cancel_hold,
        // Users
        users::list_users,
        users::me,
        users::get_user_by_name,
    ),
    components(
        schemas(
            // Items
            crate::models::ItemView,
            crate::models::ItemType,
            crate::models::Availability,
            items::QueuePositionResponse,
            items::EligibilityResponse,
            // Circulation
            crate::models::Outcome,
            // Users
            crate::models::UserView,
            crate::models::UserType,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "items", description = "Catalogue items"),
        (name = "circulation", description = "Borrow, return and holds"),
        (name = "users", description = "User accounts")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
