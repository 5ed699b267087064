//! Shared handler state and the store readiness gate.

use crate::{ApiError, ApiResult};

use pms_auth::{JwtValidator, TokenIssuer};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use sqlx::SqlitePool;
use tokio::sync::OnceCell;

/// State cloned into every handler.
///
/// The pool sits behind a write-once cell: the listener starts before the
/// store is connected and migrated, and handlers that need the store answer
/// 503 until the initialization task fills the cell.
#[derive(Clone)]
pub struct AppState {
    store: Arc<OnceCell<SqlitePool>>,
    /// Display name of the backing database, reported by the health endpoints
    pub database_name: Arc<str>,
    /// Present when session tokens are enabled
    pub jwt_validator: Option<Arc<JwtValidator>>,
    pub token_issuer: Option<Arc<TokenIssuer>>,
}

impl AppState {
    /// State with a closed readiness gate.
    pub fn new(database_name: impl Into<Arc<str>>) -> Self {
        Self {
            store: Arc::new(OnceCell::new()),
            database_name: database_name.into(),
            jwt_validator: None,
            token_issuer: None,
        }
    }

    /// State whose gate is already open. Used by tests and tools that
    /// initialize the store themselves.
    pub fn ready(pool: SqlitePool, database_name: impl Into<Arc<str>>) -> Self {
        let state = Self::new(database_name);
        state.open_gate(pool);
        state
    }

    pub fn with_session_tokens(mut self, validator: JwtValidator, issuer: TokenIssuer) -> Self {
        self.jwt_validator = Some(Arc::new(validator));
        self.token_issuer = Some(Arc::new(issuer));
        self
    }

    /// Open the readiness gate. Returns false if it was already open.
    pub fn open_gate(&self, pool: SqlitePool) -> bool {
        self.store.set(pool).is_ok()
    }

    pub fn is_ready(&self) -> bool {
        self.store.initialized()
    }

    pub fn auth_enabled(&self) -> bool {
        self.jwt_validator.is_some()
    }

    /// The store pool, or 503 while initialization is still running.
    #[track_caller]
    pub fn pool(&self) -> ApiResult<SqlitePool> {
        self.store
            .get()
            .cloned()
            .ok_or_else(|| ApiError::Unavailable {
                message: "Server is initializing, please try again".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// The pool if the gate is open, without producing an error.
    pub fn try_pool(&self) -> Option<SqlitePool> {
        self.store.get().cloned()
    }
}
