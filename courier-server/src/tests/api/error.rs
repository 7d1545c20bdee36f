use crate::api::error::ApiError;
use crate::service::{AuthFlowError, FieldViolation};

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_lost_otp_race_returns_409_conflict() {
    let error: ApiError = AuthFlowError::Conflict.into();
    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert!(json["error"]["message"].as_str().unwrap().contains("retry"));
}

#[tokio::test]
async fn test_validation_error_keeps_field_details() {
    let error: ApiError = AuthFlowError::Validation {
        violations: vec![FieldViolation {
            field: "password",
            message: "must be at least 8 characters".into(),
        }],
    }
    .into();
    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["details"][0]["field"], "password");
}

#[tokio::test]
async fn test_undeliverable_shares_the_not_found_envelope() {
    let (status_a, json_a) = render(AuthFlowError::Undeliverable.into()).await;
    let (status_b, json_b) = render(AuthFlowError::NotFound.into()).await;

    assert_eq!(status_a, StatusCode::NOT_FOUND);
    assert_eq!(status_a, status_b);
    assert_eq!(json_a, json_b);
}

#[tokio::test]
async fn test_internal_error_hides_detail_from_clients() {
    let error: ApiError = AuthFlowError::internal("connection pool exhausted").into();
    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(
        !json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("connection pool")
    );
}
