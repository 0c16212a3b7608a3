//! User endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::UserView};

use super::CurrentUser;

/// List all users (staff only)
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(
        ("x-user-id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "List of users", body = Vec<UserView>),
        (status = 403, description = "Caller is not staff")
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<Vec<UserView>>> {
    user.require_staff()?;

    let users = state.services.catalog.list_users().await?;
    Ok(Json(users.iter().map(UserView::from).collect()))
}

/// The acting user, with current loans and holds
#[utoipa::path(
    get,
    path = "/users/me",
    tag = "users",
    params(
        ("x-user-id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Current user", body = UserView),
        (status = 401, description = "Unknown caller")
    )
)]
pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserView> {
    Json(UserView::from(&user))
}

/// Resolve a user by display name, used to pick an account before acting
#[utoipa::path(
    get,
    path = "/users/by-name/{name}",
    tag = "users",
    params(
        ("name" = String, Path, description = "Exact user name")
    ),
    responses(
        (status = 200, description = "User", body = UserView),
        (status = 404, description = "No user with that name")
    )
)]
pub async fn get_user_by_name(
    State(state): State<crate::AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<UserView>> {
    let user = state.services.catalog.find_user_by_name(&name).await?;
    Ok(Json(UserView::from(&user)))
}
