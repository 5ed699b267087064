//! Readiness-gated access to the store

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::SqlitePool;

/// Extracts the store pool, rejecting with 503 until initialization is done.
///
/// Put it first in a handler's argument list so the gate is checked before
/// the path or body is looked at.
pub struct Store(pub SqlitePool);

impl FromRequestParts<AppState> for Store {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move { state.pool().map(Store) }
    }
}
