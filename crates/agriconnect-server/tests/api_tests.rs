//! Integration tests for the AgriConnect API.

use agri_assistant::{Assistant, Connectivity};
use agriconnect_server::api::{create_router, AppState};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use session_store::{FileStorage, KeyValueStorage, MemoryStorage, SessionStore, StorageError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app with memory-only storage.
fn create_test_app() -> Router {
    let session = SessionStore::initialize(MemoryStorage::new());
    let assistant = Assistant::new(Connectivity::Online);
    create_router(AppState::new(session, assistant))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

async fn post(app: &Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn registration(phone: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "Ravi",
        "phone": phone,
        "password": "secret",
        "confirm_password": "secret",
        "location": "Hyderabad"
    })
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["identity_count"], 1);
    assert_eq!(json["assistant_mode"], "online");
}

#[tokio::test]
async fn test_session_empty_on_start() {
    let app = create_test_app();

    let (status, json) = get(&app, "/v1/session").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["authenticated"], false);
    assert!(json["user"].is_null());
}

#[tokio::test]
async fn test_list_identities_has_demo_without_password() {
    let app = create_test_app();

    let (status, json) = get(&app, "/v1/identities").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);
    assert_eq!(json["identities"][0]["phone"], "9876543210");
    assert!(json["identities"][0].get("password").is_none());
}

#[tokio::test]
async fn test_demo_login() {
    let app = create_test_app();

    let (status, json) = post(
        &app,
        "/v1/login",
        serde_json::json!({"phone": "9876543210", "password": "password123"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["user"]["id"], "1");
    assert!(json["user"].get("password").is_none());

    let (_, json) = get(&app, "/v1/session").await;
    assert_eq!(json["authenticated"], true);
    assert_eq!(json["user"]["phone"], "9876543210");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = create_test_app();

    let (status, json) = post(
        &app,
        "/v1/login",
        serde_json::json!({"phone": "9876543210", "password": "wrong"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = create_test_app();

    let (status, json) = post(&app, "/v1/login", serde_json::json!({"phone": "9876543210"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn test_register_login_logout_flow() {
    let app = create_test_app();

    let (status, json) = post(&app, "/v1/register", registration("1111111111")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["user"]["phone"], "1111111111");
    assert!(json["user"].get("password").is_none());

    let (_, json) = get(&app, "/v1/session").await;
    assert_eq!(json["user"]["name"], "Ravi");

    let (status, _) = post(&app, "/v1/logout", serde_json::json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = get(&app, "/v1/session").await;
    assert_eq!(json["authenticated"], false);

    let (status, _) = post(
        &app,
        "/v1/login",
        serde_json::json!({"phone": "1111111111", "password": "secret"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = get(&app, "/v1/identities").await;
    assert_eq!(json["total"], 2);
}

#[tokio::test]
async fn test_register_duplicate_phone() {
    let app = create_test_app();

    let (status, json) = post(&app, "/v1/register", registration("9876543210")).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "ALREADY_REGISTERED");

    let (_, json) = get(&app, "/v1/identities").await;
    assert_eq!(json["total"], 1);
}

#[tokio::test]
async fn test_register_password_mismatch() {
    let app = create_test_app();
    let mut body = registration("1111111111");
    body["confirm_password"] = "other".into();

    let (status, json) = post(&app, "/v1/register", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Passwords do not match");
}

#[tokio::test]
async fn test_register_short_phone() {
    let app = create_test_app();

    let (status, json) = post(&app, "/v1/register", registration("12345")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Please enter a valid phone number");
}

#[tokio::test]
async fn test_session_persists_across_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let session = SessionStore::initialize(FileStorage::new(dir.path()));
        let app = create_router(AppState::new(session, Assistant::new(Connectivity::Online)));
        let (status, _) = post(&app, "/v1/register", registration("1111111111")).await;
        assert_eq!(status, StatusCode::OK);
    }

    let session = SessionStore::initialize(FileStorage::new(dir.path()));
    let app = create_router(AppState::new(session, Assistant::new(Connectivity::Online)));

    let (_, json) = get(&app, "/v1/session").await;
    assert_eq!(json["user"]["phone"], "1111111111");

    let (_, json) = get(&app, "/v1/identities").await;
    assert_eq!(json["total"], 2);
}

#[tokio::test]
async fn test_ask_assistant() {
    let app = create_test_app();

    let (status, json) = post(
        &app,
        "/v1/assistant/ask",
        serde_json::json!({"message": "Best time to sow wheat?"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["mode"], "online");
    assert!(json["reply"]
        .as_str()
        .unwrap()
        .starts_with("The ideal time for sowing wheat"));
}

#[tokio::test]
async fn test_ask_assistant_offline() {
    let session = SessionStore::initialize(MemoryStorage::new());
    let app = create_router(AppState::new(session, Assistant::new(Connectivity::Offline)));

    let (status, json) = post(
        &app,
        "/v1/assistant/ask",
        serde_json::json!({"message": "How to get crop insurance?"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["mode"], "offline");
    assert!(json["reply"].as_str().unwrap().contains("PMFBY"));
}

#[tokio::test]
async fn test_ask_assistant_empty_message() {
    let app = create_test_app();

    let (status, json) = post(&app, "/v1/assistant/ask", serde_json::json!({"message": "  "})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "EMPTY_MESSAGE");
}

#[tokio::test]
async fn test_suggestions() {
    let app = create_test_app();

    let (status, json) = get(&app, "/v1/assistant/suggestions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["suggestions"].as_array().unwrap().len(), 7);
    assert_eq!(json["suggestions"][6]["text"], "How to store grains safely?");
}

/// Memory storage whose writes fail once `fail_writes` is set.
#[derive(Clone, Default)]
struct ReadOnlyDisk {
    inner: MemoryStorage,
    fail_writes: Arc<AtomicBool>,
}

impl KeyValueStorage for ReadOnlyDisk {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Io(std::io::Error::other("read-only filesystem")));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Io(std::io::Error::other("read-only filesystem")));
        }
        self.inner.remove(key)
    }
}

#[tokio::test]
async fn test_storage_failure_returns_500() {
    let storage = ReadOnlyDisk::default();
    let session = SessionStore::initialize(storage.clone());
    let app = create_router(AppState::new(session, Assistant::new(Connectivity::Online)));
    storage.fail_writes.store(true, Ordering::SeqCst);

    let (status, json) = post(&app, "/v1/register", registration("1111111111")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "STORAGE_ERROR");

    let (status, _) = post(
        &app,
        "/v1/login",
        serde_json::json!({"phone": "9876543210", "password": "password123"}),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    // Nothing from the failed requests is visible
    let (_, json) = get(&app, "/v1/identities").await;
    assert_eq!(json["total"], 1);
    let (_, json) = get(&app, "/v1/session").await;
    assert_eq!(json["authenticated"], false);

    // Once writes work again the same phone can register
    storage.fail_writes.store(false, Ordering::SeqCst);
    let (status, _) = post(&app, "/v1/register", registration("1111111111")).await;
    assert_eq!(status, StatusCode::OK);
}
