//! Integration tests for login
mod common;

use crate::common::{create_test_pool, send, send_with_headers};

use pms_auth::{JwtValidator, TokenIssuer};
use pms_config::AdminConfig;
use pms_core::{User, UserRole};
use pms_db::UserRepository;
use pms_server::{AppState, build_router, startup};

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;

const SECRET: &[u8] = b"login-tests-secret-0123456789abcdefghij";

async fn seeded_state() -> AppState {
    let pool = create_test_pool().await;
    startup::seed_admin(&pool, &AdminConfig::default())
        .await
        .unwrap();
    AppState::ready(pool, "test")
}

async fn insert_legacy_user(state: &AppState, email: &str, plaintext: &str) -> User {
    let user = User::new(
        "Legacy".to_string(),
        "LEG001".to_string(),
        email,
        plaintext.to_string(),
        UserRole::Qa,
    );
    UserRepository::new(state.try_pool().unwrap())
        .create(&user)
        .await
        .unwrap();
    user
}

#[tokio::test]
async fn test_login_with_seeded_admin() {
    let state = seeded_state().await;

    let (status, json) = send(
        &state,
        "POST",
        "/login",
        Some(json!({ "email": "Admin@Example.com", "password": "admin@123" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Logged in successfully");
    assert_eq!(json["role"], "Admin");
    assert_eq!(json["userType"], "Admin");
    assert_eq!(json["name"], "Admin");
    assert_eq!(json["email"], "admin@example.com");
    assert_eq!(json["employeeCode"], "ADMIN001");
    assert!(json["userId"].is_string());
    assert!(json.get("token").is_none());
    assert!(json.get("password").is_none());
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
    let state = seeded_state().await;

    let (wrong_status, wrong_body) = send(
        &state,
        "POST",
        "/login",
        Some(json!({ "email": "admin@example.com", "password": "nope" })),
    )
    .await;
    let (unknown_status, unknown_body) = send(
        &state,
        "POST",
        "/login",
        Some(json!({ "email": "nobody@example.com", "password": "nope" })),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_missing_credentials_is_bad_request() {
    let state = seeded_state().await;

    for body in [
        json!({}),
        json!({ "email": "admin@example.com" }),
        json!({ "password": "admin@123" }),
        json!({ "email": "  ", "password": "admin@123" }),
    ] {
        let (status, json) = send(&state, "POST", "/login", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Email and password are required");
    }
}

#[tokio::test]
async fn test_legacy_plaintext_login_upgrades_hash() {
    let state = seeded_state().await;
    let user = insert_legacy_user(&state, "legacy@example.com", "old-secret").await;

    let (status, json) = send(
        &state,
        "POST",
        "/login",
        Some(json!({ "email": "legacy@example.com", "password": "old-secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["userId"], user.id.to_string());

    let repo = UserRepository::new(state.try_pool().unwrap());
    let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert!(stored.stored_password.starts_with("$argon2"));
    assert!(repo.find_with_legacy_passwords().await.unwrap().is_empty());

    // Same password keeps working against the new hash
    let (status, _) = send(
        &state,
        "POST",
        "/login",
        Some(json!({ "email": "legacy@example.com", "password": "old-secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_legacy_plaintext_wrong_password_is_not_upgraded() {
    let state = seeded_state().await;
    let user = insert_legacy_user(&state, "legacy2@example.com", "old-secret").await;

    let (status, _) = send(
        &state,
        "POST",
        "/login",
        Some(json!({ "email": "legacy2@example.com", "password": "guess" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let repo = UserRepository::new(state.try_pool().unwrap());
    let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored.stored_password, "old-secret");
}

#[tokio::test]
async fn test_unsupported_hash_cannot_log_in() {
    let state = seeded_state().await;
    insert_legacy_user(&state, "bcrypt@example.com", "$2b$10$abcdefghijklmnopqrstuv").await;

    let (status, json) = send(
        &state,
        "POST",
        "/login",
        Some(json!({ "email": "bcrypt@example.com", "password": "$2b$10$abcdefghijklmnopqrstuv" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_legacy_plaintext_starting_with_dollar_logs_in() {
    let state = seeded_state().await;
    let user = insert_legacy_user(&state, "l@example.com", "$ecret123").await;

    let (status, json) = send(
        &state,
        "POST",
        "/login",
        Some(json!({ "email": "l@example.com", "password": "$ecret123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Logged in successfully");

    let repo = UserRepository::new(state.try_pool().unwrap());
    let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert!(stored.stored_password.starts_with("$argon2"));
}

#[tokio::test]
async fn test_unknown_email_still_unauthorized_after_dummy_check() {
    let state = seeded_state().await;

    for _ in 0..2 {
        let (status, json) = send(
            &state,
            "POST",
            "/login",
            Some(json!({ "email": "ghost@example.com", "password": "whatever" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["message"], "Invalid email or password");
    }
}

#[tokio::test]
async fn test_session_token_issued_and_enforced() {
    let state = seeded_state().await.with_session_tokens(
        JwtValidator::with_hs256(SECRET),
        TokenIssuer::with_hs256(SECRET, Duration::from_secs(600)),
    );

    let (status, json) = send(
        &state,
        "POST",
        "/login",
        Some(json!({ "email": "admin@example.com", "password": "admin@123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = json["token"].as_str().expect("token issued").to_string();

    // Filtered lists now require the token
    let (status, json) = send(&state, "GET", "/tasks", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");

    let bearer = format!("Bearer {}", token);
    let (status, json) = send_with_headers(
        build_router(state.clone()),
        "GET",
        "/tasks",
        None,
        &[("Authorization", bearer.as_str())],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_seed_admin_is_idempotent() {
    let pool = create_test_pool().await;
    let admin = AdminConfig::default();

    assert!(startup::seed_admin(&pool, &admin).await.unwrap());
    assert!(!startup::seed_admin(&pool, &admin).await.unwrap());

    let users = UserRepository::new(pool).find_all().await.unwrap();
    assert_eq!(users.len(), 1);
    assert!(users[0].is_admin());
    assert!(users[0].stored_password.starts_with("$argon2"));
}
