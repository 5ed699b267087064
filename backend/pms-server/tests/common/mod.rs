#![allow(dead_code)]

//! Test infrastructure for pms-server API tests

use pms_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    pms_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// AppState with the readiness gate already open
pub async fn create_test_app_state() -> AppState {
    AppState::ready(create_test_pool().await, "test")
}

/// Send one request through a fresh router and decode the JSON body
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    send_with_headers(build_router(state.clone()), method, uri, body, &[]).await
}

pub async fn send_with_headers(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    headers: &[(&str, &str)],
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Create a user through the API and return its id
pub async fn create_user(state: &AppState, email: &str, code: &str, role: &str) -> String {
    let (status, json) = send(
        state,
        "POST",
        "/users",
        Some(serde_json::json!({
            "name": format!("User {}", code),
            "employeeCode": code,
            "email": email,
            "password": "pa55word",
            "role": role,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create user failed: {json}");
    json["user"]["_id"].as_str().unwrap().to_string()
}

/// Create a project through the API and return its id
pub async fn create_project(state: &AppState, name: &str) -> String {
    let (status, json) = send(
        state,
        "POST",
        "/projects",
        Some(serde_json::json!({
            "name": name,
            "description": "Test project",
            "startDate": "2025-01-01",
            "endDate": "2025-06-30",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create project failed: {json}");
    json["project"]["_id"].as_str().unwrap().to_string()
}

/// Collect the `_id` of every document in a list response
pub fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|doc| doc["_id"].as_str().unwrap().to_string())
        .collect()
}
