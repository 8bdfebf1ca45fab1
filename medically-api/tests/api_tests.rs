use std::sync::{Arc, Once};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use medically_api::{create_router, AppState};
use medically_data::repository::tests::FailingStore;
use medically_data::repository::InMemoryStore;

// Ensure tracing is initialized only once
static INIT: Once = Once::new();

fn initialize() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

fn memory_app() -> Router {
    initialize();
    create_router(AppState::new(Arc::new(InMemoryStore::new())))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

fn json_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).expect("response body is JSON")
}

#[tokio::test]
async fn test_user_lifecycle() {
    let app = memory_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/user",
        Some(json!({"name": "Alice", "email": "a@x.com", "contact": "123"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_body(&body),
        json!({"id": 1, "name": "Alice", "email": "a@x.com", "contact": "123"})
    );

    let (status, body) = send(&app, Method::GET, "/user/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["name"], "Alice");

    let (status, body) = send(&app, Method::DELETE, "/user/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({"id": 1}));

    let (status, _) = send(&app, Method::GET, "/user/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_records_are_not_found() {
    let app = memory_app();

    let (status, body) = send(&app, Method::GET, "/user/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(String::from_utf8_lossy(&body).contains("not found"));

    let (status, _) = send(&app, Method::DELETE, "/clinic/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::PUT, "/disease/999", Some(json!({"name": "flu", "desc": "viral"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/disease", None).await;
    assert_eq!(json_body(&body), json!([]));
}

#[tokio::test]
async fn test_list_returns_records_in_creation_order() {
    let app = memory_app();
    for name in ["a", "b", "c"] {
        let (status, _) = send(&app, Method::POST, "/clinic", Some(json!({"name": name, "desc": "clinic"}))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, Method::GET, "/clinic", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_body(&body),
        json!([
            {"id": 1, "name": "a", "desc": "clinic"},
            {"id": 2, "name": "b", "desc": "clinic"},
            {"id": 3, "name": "c", "desc": "clinic"},
        ])
    );
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let app = memory_app();

    let (status, body) = send(&app, Method::POST, "/med", Some(json!({"id": 77, "name": "aspirin", "desc": "analgesic"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["id"], 1);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request_and_store_unchanged() {
    let app = memory_app();

    let (status, _) = send_raw(&app, Method::POST, "/user", "{\"name\": \"Alice\"").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_raw(&app, Method::POST, "/med", "{\"name\": 42}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, Method::GET, "/user", None).await;
    assert_eq!(json_body(&body), json!([]));
    let (_, body) = send(&app, Method::GET, "/med", None).await;
    assert_eq!(json_body(&body), json!([]));
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request() {
    let app = memory_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/clinic")
        .body(Body::from(json!({"name": "North", "desc": "walk-in"}).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_overwrites_record() {
    let app = memory_app();
    send(&app, Method::POST, "/disease", Some(json!({"name": "flu", "desc": "viral"}))).await;

    let (status, body) = send(&app, Method::PUT, "/disease/1", Some(json!({"name": "influenza", "desc": "seasonal"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({"id": 1, "name": "influenza", "desc": "seasonal"}));

    let (_, body) = send(&app, Method::GET, "/disease/1", None).await;
    assert_eq!(json_body(&body)["name"], "influenza");
}

#[tokio::test]
async fn test_update_with_mismatched_id_is_bad_request() {
    let app = memory_app();
    send(&app, Method::POST, "/med", Some(json!({"name": "aspirin", "desc": "analgesic"}))).await;

    let (status, body) = send(&app, Method::PUT, "/med/1", Some(json!({"id": 2, "name": "x", "desc": "y"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(String::from_utf8_lossy(&body).contains("does not match"));
}

#[tokio::test]
async fn test_update_missing_name_fails_and_keeps_row() {
    let app = memory_app();
    send(&app, Method::POST, "/med", Some(json!({"name": "aspirin", "desc": "analgesic"}))).await;

    let (status, body) = send(&app, Method::PUT, "/med/1", Some(json!({"desc": "no name"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(String::from_utf8_lossy(&body).contains("NOT NULL"));

    let (_, body) = send(&app, Method::GET, "/med/1", None).await;
    assert_eq!(json_body(&body), json!({"id": 1, "name": "aspirin", "desc": "analgesic"}));
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected() {
    let app = memory_app();
    let (status, _) = send(&app, Method::GET, "/user/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_message_is_idempotent() {
    let app = memory_app();

    for _ in 0..2 {
        let (status, body) = send(&app, Method::POST, "/add-message", Some(json!({"value": "x"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body), json!({"message": "x"}));
    }

    let (status, body) = send(&app, Method::GET, "/count", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({"count": 1}));
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = memory_app();

    let (status, body) = send(&app, Method::GET, "/ping", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");

    for path in ["/health", "/healthcheck"] {
        let (status, body) = send(&app, Method::GET, path, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body), json!({"message": "medically-core at your service!"}));
    }
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = memory_app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);

    let doc = json_body(&body);
    assert!(doc["openapi"].as_str().unwrap().starts_with("3."));
    assert!(doc["paths"]["/user/{id}"].is_object());
}

#[tokio::test]
async fn test_unsupported_method_is_rejected() {
    let app = memory_app();
    let (status, _) = send(&app, Method::PATCH, "/user/1", Some(json!({"name": "x"}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_store_outage_is_internal_error() {
    initialize();
    let app = create_router(AppState::new(Arc::new(FailingStore::unavailable())));

    let (status, _) = send(&app, Method::GET, "/user", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(&app, Method::GET, "/count", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use medically_data::database::{bootstrap, BackoffPolicy, DatabaseConfig};

    async fn sqlite_app() -> Router {
        initialize();
        let pool = bootstrap(&DatabaseConfig::sqlite_in_memory(), &BackoffPolicy::default())
            .await
            .unwrap();
        create_router(AppState::new(pool.into_store()))
    }

    #[tokio::test]
    async fn test_user_lifecycle_on_sqlite() {
        let app = sqlite_app().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/user",
            Some(json!({"name": "Alice", "email": "a@x.com", "contact": "123"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = json_body(&body)["id"].as_i64().unwrap();
        assert!(id > 0);

        let (status, body) = send(&app, Method::GET, &format!("/user/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body)["email"], "a@x.com");

        let (status, _) = send(&app, Method::DELETE, &format!("/user/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, Method::GET, &format!("/user/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_not_null_violation_on_sqlite() {
        let app = sqlite_app().await;
        send(&app, Method::POST, "/med", Some(json!({"name": "aspirin", "desc": "analgesic"}))).await;

        let (status, _) = send(&app, Method::PUT, "/med/1", Some(json!({"desc": "no name"}))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, _) = send(&app, Method::POST, "/user", Some(json!({"name": "Bob"}))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (_, body) = send(&app, Method::GET, "/med/1", None).await;
        assert_eq!(json_body(&body)["name"], "aspirin");
    }

    #[tokio::test]
    async fn test_add_message_upserts_on_sqlite() {
        let app = sqlite_app().await;

        for value in ["x", "x", "y"] {
            let (status, _) = send(&app, Method::POST, "/add-message", Some(json!({"value": value}))).await;
            assert_eq!(status, StatusCode::OK);
        }

        let (_, body) = send(&app, Method::GET, "/count", None).await;
        assert_eq!(json_body(&body), json!({"count": 2}));
    }
}
