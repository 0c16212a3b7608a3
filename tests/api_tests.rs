//! API tests driving the router in-process over the seeded catalogue

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use circulation_server::{api, repository::InMemoryCatalogue, AppConfig, AppState};

fn app() -> Router {
    let state = AppState::new(AppConfig::default(), Arc::new(InMemoryCatalogue::seeded()));
    api::create_router(state)
}

async fn send(app: &Router, method: &str, uri: &str, user_id: Option<i32>) -> (StatusCode, Value) {
    let mut request = Request::builder()
        .method(method)
        .uri(format!("/api/v1{}", uri));
    if let Some(id) = user_id {
        request = request.header("x-user-id", id.to_string());
    }

    let response = app
        .clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_caller_must_identify() {
    let app = app();

    let (status, _) = send(&app, "GET", "/items", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app, "GET", "/items", Some(42)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Unknown user 42");
}

#[tokio::test]
async fn test_list_and_get_items() {
    let app = app();

    let (status, body) = send(&app, "GET", "/items", Some(1)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 20);

    let (status, body) = send(&app, "GET", "/items/205", Some(1)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Intro to AI");
    assert_eq!(body["type_label"], "Non-Fiction");
    assert_eq!(body["dewey"], "006.30");
    assert_eq!(body["status_label"], "Available");

    let (status, _) = send(&app, "GET", "/items/999", Some(1)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_borrow_hold_return_flow() {
    let app = app();

    let (status, body) = send(&app, "POST", "/items/501/borrow", Some(1)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["message"], "Borrowed.");

    let (status, body) = send(&app, "POST", "/items/501/holds", Some(2)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["aux"], 1);
    assert_eq!(body["message"], "Hold placed. You are #1.");

    let (_, body) = send(&app, "GET", "/items/501/queue-position", Some(2)).await;
    assert_eq!(body["position"], 1);
    let (_, body) = send(&app, "GET", "/items/501/queue-position", Some(3)).await;
    assert_eq!(body["position"], -1);

    let (status, body) = send(&app, "POST", "/items/501/return", Some(1)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Returned.");

    let (_, body) = send(&app, "GET", "/items/501", Some(1)).await;
    assert_eq!(body["status"], "Available");
    assert_eq!(body["hold_queue"], serde_json::json!([2]));

    let (status, body) = send(&app, "POST", "/items/501/borrow", Some(3)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["ok"], false);
    assert_eq!(body["message"], "Another patron is first in the hold queue.");

    let (status, _) = send(&app, "POST", "/items/501/borrow", Some(2)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/users/me", Some(2)).await;
    assert_eq!(body["loans"], serde_json::json!([501]));
    assert_eq!(body["holds"], serde_json::json!([]));
}

#[tokio::test]
async fn test_cancel_hold() {
    let app = app();

    send(&app, "POST", "/items/401/borrow", Some(4)).await;
    send(&app, "POST", "/items/401/holds", Some(5)).await;

    let (status, body) = send(&app, "DELETE", "/items/401/holds", Some(5)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hold canceled.");

    let (status, body) = send(&app, "DELETE", "/items/401/holds", Some(5)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "You don't have a hold on this item.");
}

#[tokio::test]
async fn test_eligibility() {
    let app = app();

    let (status, body) = send(&app, "GET", "/items/101/eligibility", Some(1)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["borrow"]["ok"], true);
    assert_eq!(body["return"]["message"], "Item is already available.");
    assert_eq!(body["place_hold"]["message"], "Holds allowed only on checked-out items.");
    assert_eq!(body["cancel_hold"]["ok"], false);
    assert_eq!(body["queue_position"], -1);

    // Eligibility never changes state
    let (_, body) = send(&app, "GET", "/items/101", Some(1)).await;
    assert_eq!(body["status"], "Available");
}

#[tokio::test]
async fn test_staff_cannot_circulate() {
    let app = app();

    let (status, body) = send(&app, "POST", "/items/101/borrow", Some(100)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "NotAuthorized");

    let (_, body) = send(&app, "GET", "/items/101", Some(100)).await;
    assert_eq!(body["status"], "Available");
}

#[tokio::test]
async fn test_user_listing_requires_staff() {
    let app = app();

    let (status, _) = send(&app, "GET", "/users", Some(1)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, "GET", "/users", Some(101)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 7);
    assert_eq!(body[6]["type_label"], "System Administrator");
}

#[tokio::test]
async fn test_user_by_name() {
    let app = app();

    let (status, body) = send(&app, "GET", "/users/by-name/Dave", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 4);

    let (status, _) = send(&app, "GET", "/users/by-name/Mallory", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
