//! Integration Tests for the Record Endpoint
//!
//! Tests the full request/response cycle for each verb, the envelope
//! contract, and TTL expiry through the running router.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use slotkv::api::create_router;
use slotkv::{AppState, Config};

// == Helper Functions ==

fn create_test_app() -> Router {
    let state = AppState::from_config(&Config::default());
    create_router(state)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get_request() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap()
}

fn post_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete_request() -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri("/")
        .body(Body::empty())
        .unwrap()
}

// == Read Endpoint Tests ==

#[tokio::test]
async fn test_read_empty_returns_not_found_envelope() {
    let app = create_test_app();

    let response = app.oneshot(get_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_to_json(response.into_body()).await;
    assert_eq!(
        body,
        json!({
            "responseStatus": 404,
            "responseError": {"errorCode": "NOT_FOUND", "errorText": "Not found"},
            "responseResult": null
        })
    );
}

#[tokio::test]
async fn test_write_then_read() {
    let app = create_test_app();

    let write_response = app
        .clone()
        .oneshot(post_request(r#"{"name":"a","count":3}"#))
        .await
        .unwrap();
    assert_eq!(write_response.status(), StatusCode::OK);

    let body = body_to_json(write_response.into_body()).await;
    assert_eq!(body["responseStatus"], 200);
    assert!(body["responseError"].is_null());
    assert_eq!(body["responseResult"], json!({"name": "a", "count": 3}));

    let read_response = app.oneshot(get_request()).await.unwrap();
    assert_eq!(read_response.status(), StatusCode::OK);

    let body = body_to_json(read_response.into_body()).await;
    assert_eq!(body["responseResult"], json!({"name": "a", "count": 3}));
}

#[tokio::test]
async fn test_overwrite_replaces_whole_record() {
    let app = create_test_app();

    app.clone()
        .oneshot(post_request(r#"{"a":1,"b":2}"#))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_request(r#"{"a":9}"#))
        .await
        .unwrap();

    let response = app.oneshot(get_request()).await.unwrap();
    let body = body_to_json(response.into_body()).await;

    // Full replace, not merge: "b" from the first write is gone.
    assert_eq!(body["responseResult"], json!({"a": 9}));
}

// == Delete Endpoint Tests ==

#[tokio::test]
async fn test_delete_then_read() {
    let app = create_test_app();

    app.clone()
        .oneshot(post_request(r#"{"name":"a"}"#))
        .await
        .unwrap();

    let delete_response = app.clone().oneshot(delete_request()).await.unwrap();
    assert_eq!(delete_response.status(), StatusCode::OK);

    let body = body_to_json(delete_response.into_body()).await;
    assert_eq!(body["responseStatus"], 200);
    assert!(body["responseError"].is_null());
    assert_eq!(body["responseResult"], "DELETE SUCCESS");

    let read_response = app.oneshot(get_request()).await.unwrap();
    assert_eq!(read_response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_on_empty_slot_succeeds() {
    let app = create_test_app();

    let response = app.oneshot(delete_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["responseResult"], "DELETE SUCCESS");
}

// == Unsupported Verb Tests ==

#[tokio::test]
async fn test_unsupported_verb_returns_405_envelope() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["responseStatus"], 405);
    assert_eq!(body["responseError"]["errorCode"], "METHOD_NOT_ALLOWED");
    assert_eq!(body["responseError"]["errorText"], "Method not allowed");
    assert!(body["responseResult"].is_null());
}

// == Error Response Tests ==

#[tokio::test]
async fn test_invalid_json_write() {
    let app = create_test_app();

    let response = app
        .oneshot(post_request(r#"{"invalid json"#))
        .await
        .unwrap();

    // Axum returns 400/422 for JSON parsing errors; no envelope is defined
    // for malformed bodies.
    assert!(
        response.status() == StatusCode::BAD_REQUEST
            || response.status() == StatusCode::UNPROCESSABLE_ENTITY
    );
}

// == TTL Expiry Tests ==

#[tokio::test]
async fn test_ttl_expiry_via_api() {
    let app = create_test_app();

    // Write with 1 second TTL
    let write_response = app
        .clone()
        .oneshot(post_request(r#"{"name":"a","expire":1}"#))
        .await
        .unwrap();
    assert_eq!(write_response.status(), StatusCode::OK);

    let body = body_to_json(write_response.into_body()).await;
    assert_eq!(body["responseResult"], json!({"name": "a", "expire": 1}));

    // Present immediately
    let read_response = app.clone().oneshot(get_request()).await.unwrap();
    assert_eq!(read_response.status(), StatusCode::OK);
    let body = body_to_json(read_response.into_body()).await;
    assert_eq!(body["responseResult"], json!({"name": "a", "expire": 1}));

    // Wait for the deadline to pass
    tokio::time::sleep(Duration::from_millis(1300)).await;

    // Gone
    let read_response = app.oneshot(get_request()).await.unwrap();
    assert_eq!(read_response.status(), StatusCode::NOT_FOUND);

    let body = body_to_json(read_response.into_body()).await;
    assert_eq!(
        body,
        json!({
            "responseStatus": 404,
            "responseError": {"errorCode": "NOT_FOUND", "errorText": "Not found"},
            "responseResult": null
        })
    );
}

#[tokio::test]
async fn test_delete_cancels_pending_expiry() {
    let app = create_test_app();

    app.clone()
        .oneshot(post_request(r#"{"x":1,"expire":1}"#))
        .await
        .unwrap();
    app.clone().oneshot(delete_request()).await.unwrap();

    // A record written after the delete must survive the old deadline.
    app.clone()
        .oneshot(post_request(r#"{"fresh":true}"#))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(1300)).await;

    let response = app.oneshot(get_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["responseResult"], json!({"fresh": true}));
}

#[tokio::test]
async fn test_untimed_overwrite_cancels_stale_expiry() {
    let app = create_test_app();

    app.clone()
        .oneshot(post_request(r#"{"a":1,"expire":1}"#))
        .await
        .unwrap();

    // Overwrite without a TTL: the earlier schedule must not delete it.
    app.clone()
        .oneshot(post_request(r#"{"b":2}"#))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(1300)).await;

    let response = app.oneshot(get_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["responseResult"], json!({"b": 2}));
}

#[tokio::test]
async fn test_huge_expire_value_is_stored_untimed() {
    let app = create_test_app();

    // Well-formed JSON with an expire value too large to schedule must
    // still be a successful write, not a panic.
    let response = app
        .clone()
        .oneshot(post_request(r#"{"x":1,"expire":1e300}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let read_response = app.oneshot(get_request()).await.unwrap();
    assert_eq!(read_response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_zero_expire_means_no_ttl() {
    let app = create_test_app();

    app.clone()
        .oneshot(post_request(r#"{"x":1,"expire":0}"#))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(300)).await;

    let response = app.oneshot(get_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}
