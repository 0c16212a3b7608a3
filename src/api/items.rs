//! Item (catalogue) endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{ItemView, Outcome},
};

use super::CurrentUser;

/// Caller's place in an item's hold queue
#[derive(Serialize, ToSchema)]
pub struct QueuePositionResponse {
    pub item_id: i32,
    /// 1-indexed position, -1 when not queued
    pub position: i32,
}

/// What the caller may currently do with an item
#[derive(Serialize, ToSchema)]
pub struct EligibilityResponse {
    pub item_id: i32,
    pub borrow: Outcome,
    #[serde(rename = "return")]
    pub return_item: Outcome,
    pub place_hold: Outcome,
    pub cancel_hold: Outcome,
    /// 1-indexed position, -1 when not queued
    pub queue_position: i32,
}

fn position_or_absent(position: Option<usize>) -> i32 {
    position
        .and_then(|p| i32::try_from(p).ok())
        .unwrap_or(-1)
}

/// List every catalogue item
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    params(
        ("x-user-id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "List of items", body = Vec<ItemView>),
        (status = 401, description = "Unknown caller")
    )
)]
pub async fn list_items(
    State(state): State<crate::AppState>,
    CurrentUser(_user): CurrentUser,
) -> AppResult<Json<Vec<ItemView>>> {
    let items = state.services.catalog.list_items().await?;
    Ok(Json(items.iter().map(ItemView::from).collect()))
}

/// Get item details by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(
        ("id" = i32, Path, description = "Item ID"),
        ("x-user-id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Item details", body = ItemView),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_item(
    State(state): State<crate::AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ItemView>> {
    let item = state.services.catalog.get_item(id).await?;
    Ok(Json(ItemView::from(&item)))
}

/// Caller's position in the item's hold queue
#[utoipa::path(
    get,
    path = "/items/{id}/queue-position",
    tag = "items",
    params(
        ("id" = i32, Path, description = "Item ID"),
        ("x-user-id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Queue position", body = QueuePositionResponse)
    )
)]
pub async fn queue_position(
    State(state): State<crate::AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<Json<QueuePositionResponse>> {
    let position = state.services.circulation.queue_position(user.id, id).await?;

    Ok(Json(QueuePositionResponse {
        item_id: id,
        position: position_or_absent(position),
    }))
}

/// Evaluate every circulation gate for the caller without changing anything
#[utoipa::path(
    get,
    path = "/items/{id}/eligibility",
    tag = "items",
    params(
        ("id" = i32, Path, description = "Item ID"),
        ("x-user-id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Gate outcomes", body = EligibilityResponse)
    )
)]
pub async fn eligibility(
    State(state): State<crate::AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<Json<EligibilityResponse>> {
    let circulation = &state.services.circulation;

    Ok(Json(EligibilityResponse {
        item_id: id,
        borrow: circulation.can_borrow(user.id, id).await?,
        return_item: circulation.can_return(user.id, id).await?,
        place_hold: circulation.can_place_hold(user.id, id).await?,
        cancel_hold: circulation.can_cancel_hold(user.id, id).await?,
        queue_position: position_or_absent(circulation.queue_position(user.id, id).await?),
    }))
}
