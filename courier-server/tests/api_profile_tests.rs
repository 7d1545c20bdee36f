//! Integration tests for the protected profile API
mod common;

use crate::common::{create_test_app_state, put_json_authed, register_and_verify, send};

use courier_server::routes::build_router;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;

#[tokio::test]
async fn test_update_profile_requires_bearer_token() {
    let (state, _sent) = create_test_app_state().await;
    let app = build_router(state);

    let request = Request::builder()
        .method("PUT")
        .uri("/api/v1/profile")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "first_name": "Ada" }).to_string()))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_update_profile_rejects_forged_token() {
    let (state, _sent) = create_test_app_state().await;
    let app = build_router(state);

    let (status, body) = put_json_authed(
        &app,
        "/api/v1/profile",
        "eyJhbGciOiJIUzI1NiJ9.forged.signature",
        json!({ "first_name": "Ada" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_update_profile_upserts_and_shows_up_in_login() {
    let (state, sent) = create_test_app_state().await;
    let app = build_router(state);

    let token = register_and_verify(&app, &sent, "rider@example.com", "hunter2hunter2").await;

    let (status, body) = put_json_authed(
        &app,
        "/api/v1/profile",
        &token,
        json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "dob": "1990-04-20",
            "city": "Lagos"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["first_name"], "Ada");
    assert_eq!(body["profile"]["dob"], "1990-04-20");

    // Second update replaces fields on the same row
    let (status, body) = put_json_authed(
        &app,
        "/api/v1/profile",
        &token,
        json!({ "first_name": "Ada", "about_me": "Moves parcels" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["about_me"], "Moves parcels");
    assert!(body["profile"]["city"].is_null());

    // The merged view rides along on a verified login
    let (status, body) = common::post_json(
        &app,
        "/api/v1/auth/login",
        json!({ "identifier": "rider@example.com", "password": "hunter2hunter2" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["profile"]["first_name"], "Ada");
    assert_eq!(body["user"]["profile"]["about_me"], "Moves parcels");
}

#[tokio::test]
async fn test_update_profile_validates_fields() {
    let (state, sent) = create_test_app_state().await;
    let app = build_router(state);

    let token = register_and_verify(&app, &sent, "rider@example.com", "hunter2hunter2").await;

    let (status, body) = put_json_authed(
        &app,
        "/api/v1/profile",
        &token,
        json!({ "first_name": "  ", "dob": "20-04-1990" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let details = body["error"]["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
}
