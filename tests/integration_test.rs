use axum::http::StatusCode;
use quotes_service::api::{self, AppState};
use quotes_service::db::init_db;
use quotes_service::{QuoteService, SqliteQuoteStore};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

async fn setup_test_app() -> (axum::Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();

    let pool = init_db(&db_path).await.expect("init_db failed");
    let store = Arc::new(SqliteQuoteStore::new(pool));
    let state = AppState::new(Arc::new(QuoteService::new(store)));

    (api::create_router(state), temp_dir)
}

async fn send(app: axum::Router, method: &str, uri: &str) -> (StatusCode, String) {
    let request = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _temp) = setup_test_app().await;

    let (status, body) = send(app, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "quotes-service");
}

#[tokio::test]
async fn test_ready_endpoint() {
    let (app, _temp) = setup_test_app().await;

    let (status, body) = send(app, "GET", "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ready"));
}

#[tokio::test]
async fn test_health_rejects_other_methods() {
    let (app, _temp) = setup_test_app().await;

    let (status, body) = send(app, "POST", "/health").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(body.contains("method not allowed"));
}

#[tokio::test]
async fn test_unknown_path_returns_json_404() {
    let (app, _temp) = setup_test_app().await;

    let (status, body) = send(app, "GET", "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "not found");
}
