//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use customers_api::error::AppError;
use customers_core::error::{CustomerError, SecurityError};
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn customer_not_found_returns_404() {
    let (status, json) = error_to_response(CustomerError::NotFound.into()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn invalid_password_is_indistinguishable_from_internal() {
    let (status, json) = error_to_response(CustomerError::InvalidPassword.into()).await;
    let (internal_status, internal_json) =
        error_to_response(CustomerError::Internal("boom".into()).into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(status, internal_status);
    assert_eq!(json, internal_json);
}

#[tokio::test]
async fn internal_error_sanitizes_message() {
    let err = AppError::Customer(CustomerError::Internal(
        "relation \"customers\" does not exist".into(),
    ));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn security_errors_map_to_404_and_400() {
    let (status, _) = error_to_response(SecurityError::NoSuchUser.into()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = error_to_response(SecurityError::Expired.into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "EXPIRED");
}

#[tokio::test]
async fn bad_request_keeps_message() {
    let (status, json) = error_to_response(AppError::BadRequest("invalid body".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid body");
}

#[tokio::test]
async fn unauthorized_carries_basic_challenge() {
    let response = AppError::Unauthorized("nope".into()).into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers()["www-authenticate"],
        "Basic realm=\"customers\""
    );
}
