//! API handlers for the circulation REST endpoints

pub mod circulation;
pub mod health;
pub mod items;
pub mod openapi;
pub mod users;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, models::User, AppState};

/// Header carrying the id of the acting user
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor for the acting user.
///
/// The header only identifies the caller; nothing verifies the claim.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing X-User-Id header".to_string()))?
            .trim()
            .parse::<i32>()
            .map_err(|_| AppError::BadRequest("Invalid X-User-Id header".to_string()))?;

        let user = state
            .services
            .catalog
            .get_user(user_id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::Authentication(format!("Unknown user {}", user_id)),
                other => other,
            })?;

        Ok(CurrentUser(user))
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Items (catalogue)
        .route("/items", get(items::list_items))
        .route("/items/:id", get(items::get_item))
        .route("/items/:id/queue-position", get(items::queue_position))
        .route("/items/:id/eligibility", get(items::eligibility))
        // Circulation
        .route("/items/:id/borrow", post(circulation::borrow))
        .route("/items/:id/return", post(circulation::return_item))
        .route(
            "/items/:id/holds",
            post(circulation::place_hold).delete(circulation::cancel_hold),
        )
        // Users
        .route("/users", get(users::list_users))
        .route("/users/me", get(users::me))
        .route("/users/by-name/:name", get(users::get_user_by_name))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
