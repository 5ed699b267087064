//! Liveness, readiness and store introspection endpoints

use crate::{ApiResult, AppState, Store};

use pms_db::{collect_stats, ping};

use axum::{Json, extract::State};
use serde_json::{Value, json};

/// GET /api/health
///
/// Always answers 200, even while the store is still initializing.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let (database, database_status) = match state.try_pool() {
        Some(pool) => match ping(&pool).await {
            Ok(()) => (state.database_name.to_string(), "Connected"),
            Err(e) => {
                log::warn!("Health check ping failed: {}", e);
                (state.database_name.to_string(), "Disconnected")
            }
        },
        None => ("Not connected".to_string(), "Initializing"),
    };

    Json(json!({
        "status": "OK",
        "message": "Backend is running",
        "database": database,
        "databaseStatus": database_status,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// GET /api/ready - 200 once the store is initialized, 503 before
pub async fn ready(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    state.pool()?;
    Ok(Json(json!({ "status": "ready" })))
}

/// GET /api/debug/db
///
/// Entity tables and their row counts.
pub async fn debug_db(Store(pool): Store, State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let stats = collect_stats(&pool).await?;

    Ok(Json(json!({
        "database": state.database_name.as_ref(),
        "collections": stats.tables,
        "counts": stats.counts,
        "status": "Connected",
    })))
}
