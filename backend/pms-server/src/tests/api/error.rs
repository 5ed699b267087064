use crate::ApiError;

use pms_auth::AuthError;
use pms_core::parse_uuid;
use pms_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let response = ApiError::not_found("Project").into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Project not found");
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Project not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let response = ApiError::validation("name is required", "name").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_duplicate_returns_400() {
    let error = ApiError::Duplicate {
        message: "taken".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "DUPLICATE");
}

#[tokio::test]
async fn test_unavailable_returns_503() {
    let error = ApiError::Unavailable {
        message: "Server is initializing, please try again".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body_json(response).await["error"]["code"],
        "SERVICE_UNAVAILABLE"
    );
}

#[tokio::test]
async fn test_internal_error_echoes_message() {
    let error = ApiError::Internal {
        message: "Database connection failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], "Database connection failed");
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
    let api_err: ApiError = uuid_err.into();

    assert!(matches!(api_err, ApiError::Validation { .. }));
}

#[test]
fn test_core_error_keeps_field() {
    let core_err = parse_uuid("nope", "projectId").unwrap_err();
    let api_err: ApiError = core_err.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "Invalid projectId format");
            assert_eq!(field.as_deref(), Some("projectId"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_unique_violation_converts_to_duplicate() {
    let db_err = DbError::UniqueViolation {
        message: "UNIQUE constraint failed: users.email".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();

    assert_eq!(api_err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(api_err.code(), "DUPLICATE");
}

#[test]
fn test_other_db_error_converts_to_internal() {
    let db_err = DbError::Migration {
        message: "boom".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();

    assert_eq!(api_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_token_errors_convert_to_unauthorized() {
    let expired = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = expired.into();

    assert_eq!(api_err.status(), StatusCode::UNAUTHORIZED);
    assert!(api_err.to_string().contains("expired"));
}

#[test]
fn test_password_hash_failure_converts_to_internal() {
    let err = AuthError::PasswordHash {
        message: "rng".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = err.into();

    assert_eq!(api_err.code(), "INTERNAL_ERROR");
}
