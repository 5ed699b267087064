//! Per-request access logging and the unknown-route fallback

use std::time::Instant;

use axum::{
    Json,
    extract::Request,
    http::{Method, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Logs method, path, status and latency of every request
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed = started.elapsed();
    if status.is_server_error() {
        log::error!("{} {} -> {} ({:.2?})", method, path, status.as_u16(), elapsed);
    } else {
        log::info!("{} {} -> {} ({:.2?})", method, path, status.as_u16(), elapsed);
    }

    response
}

/// 404 for any route not registered
pub async fn route_not_found(method: Method, uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "message": "Route not found",
            "path": uri.path(),
            "method": method.as_str(),
        })),
    )
        .into_response()
}
