use crate::{ApiError, AppState, RequestScope};

use pms_auth::{JwtValidator, TokenIssuer};
use pms_core::AccessScope;

use std::time::Duration;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use uuid::Uuid;

const SECRET: &[u8] = b"request-scope-test-secret-0123456789abcdef";

fn token_state() -> AppState {
    AppState::new("test").with_session_tokens(
        JwtValidator::with_hs256(SECRET),
        TokenIssuer::with_hs256(SECRET, Duration::from_secs(3600)),
    )
}

async fn extract(state: &AppState, request: Request<Body>) -> Result<AccessScope, ApiError> {
    let (mut parts, _body) = request.into_parts();
    RequestScope::from_request_parts(&mut parts, state)
        .await
        .map(|RequestScope(scope)| scope)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_no_query_sees_everything() {
    let scope = extract(&AppState::new("test"), get("/tasks")).await.unwrap();
    assert_eq!(scope, AccessScope::All);
}

#[tokio::test]
async fn test_admin_role_sees_everything() {
    let user_id = Uuid::new_v4();
    let uri = format!("/tasks?userId={}&role=Admin", user_id);

    let scope = extract(&AppState::new("test"), get(&uri)).await.unwrap();
    assert_eq!(scope, AccessScope::All);
}

#[tokio::test]
async fn test_non_admin_is_scoped_to_user() {
    let user_id = Uuid::new_v4();
    let uri = format!("/tasks?userId={}&role=QA", user_id);

    let scope = extract(&AppState::new("test"), get(&uri)).await.unwrap();
    assert_eq!(scope, AccessScope::User(user_id));
}

#[tokio::test]
async fn test_malformed_user_id_is_rejected() {
    let err = extract(&AppState::new("test"), get("/tasks?userId=bogus"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_token_overrides_query_parameters() {
    let state = token_state();
    let user_id = Uuid::new_v4();
    let token = TokenIssuer::with_hs256(SECRET, Duration::from_secs(3600))
        .issue(user_id, "Backend Developer")
        .unwrap();

    // Claims to be admin in the query; the token says otherwise
    let request = Request::builder()
        .uri("/sprints?role=Admin")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let scope = extract(&state, request).await.unwrap();
    assert_eq!(scope, AccessScope::User(user_id));
}

#[tokio::test]
async fn test_admin_token_sees_everything() {
    let state = token_state();
    let token = TokenIssuer::with_hs256(SECRET, Duration::from_secs(3600))
        .issue(Uuid::new_v4(), "Admin")
        .unwrap();

    let request = Request::builder()
        .uri("/daily-tasks")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let scope = extract(&state, request).await.unwrap();
    assert_eq!(scope, AccessScope::All);
}

#[tokio::test]
async fn test_missing_token_is_unauthorized_when_enabled() {
    let err = extract(&token_state(), get("/tasks")).await.unwrap_err();
    assert_eq!(err.code(), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_forged_token_is_unauthorized() {
    let forged = TokenIssuer::with_hs256(
        b"some-other-secret-that-is-long-enough-000",
        Duration::from_secs(3600),
    )
    .issue(Uuid::new_v4(), "Admin")
    .unwrap();

    let request = Request::builder()
        .uri("/tasks")
        .header("Authorization", format!("Bearer {}", forged))
        .body(Body::empty())
        .unwrap();

    let err = extract(&token_state(), request).await.unwrap_err();
    assert_eq!(err.code(), "UNAUTHORIZED");
}
