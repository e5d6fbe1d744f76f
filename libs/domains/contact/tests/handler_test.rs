//! HTTP-level tests for the contact router.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use domain_contact::handlers;

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn valid_submission_is_acknowledged() {
    let app = handlers::router();

    let body = json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "Hello there"
    });
    let response = app.oneshot(post_json(&body.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "ok": true }));
}

#[tokio::test]
async fn missing_name_reports_only_that_field() {
    let app = handlers::router();

    let body = json!({
        "name": "",
        "email": "ada@example.com",
        "message": "Hello there"
    });
    let response = app.oneshot(post_json(&body.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["ok"], json!(false));
    assert_eq!(body["errors"], json!({ "name": "Name is required" }));
}

#[tokio::test]
async fn omitted_fields_get_required_messages() {
    let app = handlers::router();

    let response = app.oneshot(post_json("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["errors"],
        json!({
            "name": "Name is required",
            "email": "Email is required",
            "message": "Message is required"
        })
    );
}

#[tokio::test]
async fn malformed_email_gets_shape_message() {
    let app = handlers::router();

    let body = json!({
        "name": "Ada",
        "email": "not-an-email",
        "message": "Hello there"
    });
    let response = app.oneshot(post_json(&body.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["errors"], json!({ "email": "Enter a valid email" }));
}

#[tokio::test]
async fn malformed_json_is_a_single_error_not_a_field_map() {
    let app = handlers::router();

    let response = app.oneshot(post_json("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "ok": false, "error": "Invalid request body" }));
}
