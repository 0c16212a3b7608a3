//! Borrow, return and hold endpoints
//!
//! Every command answers with an [`Outcome`]: 200 when it went through, 422
//! when circulation policy refused it. Only patrons may call these.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::Outcome};

use super::CurrentUser;

fn respond(outcome: Outcome) -> (StatusCode, Json<Outcome>) {
    let status = if outcome.ok {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (status, Json(outcome))
}

/// Borrow an item
#[utoipa::path(
    post,
    path = "/items/{id}/borrow",
    tag = "circulation",
    params(
        ("id" = i32, Path, description = "Item ID"),
        ("x-user-id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Item borrowed", body = Outcome),
        (status = 403, description = "Caller is not a patron"),
        (status = 422, description = "Refused by circulation policy", body = Outcome)
    )
)]
pub async fn borrow(
    State(state): State<crate::AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<(StatusCode, Json<Outcome>)> {
    user.require_patron()?;

    let outcome = state.services.circulation.borrow(user.id, id).await?;
    Ok(respond(outcome))
}

/// Return a borrowed item
#[utoipa::path(
    post,
    path = "/items/{id}/return",
    tag = "circulation",
    params(
        ("id" = i32, Path, description = "Item ID"),
        ("x-user-id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Item returned", body = Outcome),
        (status = 403, description = "Caller is not a patron"),
        (status = 422, description = "Refused by circulation policy", body = Outcome)
    )
)]
pub async fn return_item(
    State(state): State<crate::AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<(StatusCode, Json<Outcome>)> {
    user.require_patron()?;

    let outcome = state.services.circulation.return_item(user.id, id).await?;
    Ok(respond(outcome))
}

/// Join the hold queue of a checked-out item
#[utoipa::path(
    post,
    path = "/items/{id}/holds",
    tag = "circulation",
    params(
        ("id" = i32, Path, description = "Item ID"),
        ("x-user-id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Hold placed, aux is the queue position", body = Outcome),
        (status = 403, description = "Caller is not a patron"),
        (status = 422, description = "Refused by circulation policy", body = Outcome)
    )
)]
pub async fn place_hold(
    State(state): State<crate::AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<(StatusCode, Json<Outcome>)> {
    user.require_patron()?;

    let outcome = state.services.circulation.place_hold(user.id, id).await?;
    Ok(respond(outcome))
}

/// Leave the hold queue of an item
#[utoipa::path(
    delete,
    path = "/items/{id}/holds",
    tag = "circulation",
    params(
        ("id" = i32, Path, description = "Item ID"),
        ("x-user-id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Hold canceled", body = Outcome),
        (status = 403, description = "Caller is not a patron"),
        (status = 422, description = "Refused by circulation policy", body = Outcome)
    )
)]
pub async fn cancel_hold(
    State(state): State<crate::AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<(StatusCode, Json<Outcome>)> {
    user.require_patron()?;

    let outcome = state.services.circulation.cancel_hold(user.id, id).await?;
    Ok(respond(outcome))
}
