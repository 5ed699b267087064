use crate::{AppState, Store};

use axum::{body::Body, extract::FromRequestParts, http::Request};
use http::StatusCode;
use sqlx::SqlitePool;

async fn extract_store(state: &AppState) -> Result<Store, crate::ApiError> {
    let request = Request::builder().body(Body::empty()).unwrap();
    let (mut parts, _body) = request.into_parts();
    Store::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_closed_gate_rejects_with_503() {
    let state = AppState::new("test");

    let err = match extract_store(&state).await {
        Ok(_) => panic!("gate should be closed"),
        Err(e) => e,
    };

    assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(err.to_string().contains("Server is initializing"));
}

#[tokio::test]
async fn test_open_gate_yields_pool() {
    let state = AppState::new("test");
    assert!(!state.is_ready());

    let pool = SqlitePool::connect(":memory:").await.unwrap();
    assert!(state.open_gate(pool.clone()));
    assert!(state.is_ready());

    // Second open is refused
    assert!(!state.open_gate(pool));

    assert!(extract_store(&state).await.is_ok());
}
