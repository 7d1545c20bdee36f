#![allow(dead_code)]

//! Test infrastructure for courier-server API tests

use courier_auth::{CredentialHasher, TokenIssuer};
use courier_server::notifier::{DeliveryError, OtpDelivery, OtpSender};
use courier_server::state::{AppState, AuthPolicy};

use std::sync::{Arc, Mutex};
use std::time::Duration;

use argon2::Params;
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Codes handed to the recording sender, as (destination, code) pairs
pub type SentCodes = Arc<Mutex<Vec<(String, String)>>>;

/// Sender that records instead of delivering
pub struct RecordingSender {
    pub sent: SentCodes,
}

#[async_trait]
impl OtpSender for RecordingSender {
    async fn send(&self, destination: &str, code: &str) -> Result<(), DeliveryError> {
        self.sent
            .lock()
            .unwrap()
            .push((destination.to_string(), code.to_string()));
        Ok(())
    }
}

/// Sender that always fails
pub struct FailingSender;

#[async_trait]
impl OtpSender for FailingSender {
    async fn send(&self, _destination: &str, _code: &str) -> Result<(), DeliveryError> {
        Err(DeliveryError::Failed {
            message: "gateway rejected the message".to_string(),
        })
    }
}

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/courier-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// AppState with a recording email sender and no SMS sender
pub async fn create_test_app_state() -> (AppState, SentCodes) {
    let sent: SentCodes = Arc::new(Mutex::new(Vec::new()));
    let email: Arc<dyn OtpSender> = Arc::new(RecordingSender { sent: sent.clone() });
    let state = create_test_app_state_with(Some(email), None).await;
    (state, sent)
}

/// AppState with explicit senders per channel
pub async fn create_test_app_state_with(
    email: Option<Arc<dyn OtpSender>>,
    sms: Option<Arc<dyn OtpSender>>,
) -> AppState {
    let pool = create_test_pool().await;
    let delivery = Arc::new(OtpDelivery::new(email, sms, Duration::from_secs(2)));

    // Minimal Argon2 cost so the hashing paths stay fast in tests
    let params = Params::new(8, 1, 1, Some(32)).expect("valid argon2 params");

    AppState {
        pool,
        token_issuer: Arc::new(TokenIssuer::new(TEST_SECRET)),
        hasher: Arc::new(CredentialHasher::with_params(params)),
        delivery,
        policy: AuthPolicy {
            session_ttl: Duration::from_secs(3600),
            verify_ttl: Duration::from_secs(600),
            otp_length: 4,
            otp_ttl: chrono::Duration::minutes(10),
        },
    }
}

/// Most recently recorded code
pub fn last_code(sent: &SentCodes) -> String {
    sent.lock()
        .unwrap()
        .last()
        .expect("no code was recorded")
        .1
        .clone()
}

pub fn sent_count(sent: &SentCodes) -> usize {
    sent.lock().unwrap().len()
}

/// POST a JSON body and return (status, parsed body)
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

/// POST a JSON body with a bearer token
pub async fn post_json_authed(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

/// PUT a JSON body with a bearer token
pub async fn put_json_authed(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Register an identifier and consume the delivered code, returning the
/// short-lived token from verification
pub async fn register_and_verify(
    app: &Router,
    sent: &SentCodes,
    identifier: &str,
    password: &str,
) -> String {
    let (status, _) = post_json(
        app,
        "/api/v1/auth/register",
        serde_json::json!({ "identifier": identifier, "password": password }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let code = last_code(sent);
    let (status, body) = post_json(
        app,
        "/api/v1/auth/verify-otp",
        serde_json::json!({ "identifier": identifier, "code": code }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    body["token"].as_str().expect("token in response").to_string()
}
