//! Password hashing off the async runtime
//!
//! Argon2 is deliberately slow, so hashing and verification run on the
//! blocking thread pool.

use crate::{ApiError, ApiResult};

use pms_auth::{PasswordVerdict, hash_password, verify_dummy_password, verify_stored_password};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::task::JoinError;

pub async fn hash(password: String) -> ApiResult<String> {
    let hashed = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(join_failed)??;
    Ok(hashed)
}

pub async fn verify(candidate: String, stored: String) -> ApiResult<PasswordVerdict> {
    let verdict =
        tokio::task::spawn_blocking(move || verify_stored_password(&candidate, &stored))
            .await
            .map_err(join_failed)??;
    Ok(verdict)
}

/// Burns one Argon2 verification so unknown accounts cost as much as known ones.
pub async fn verify_dummy(candidate: String) {
    if let Err(e) = tokio::task::spawn_blocking(move || verify_dummy_password(&candidate)).await {
        log::warn!("Dummy password check failed: {}", e);
    }
}

#[track_caller]
fn join_failed(e: JoinError) -> ApiError {
    ApiError::Internal {
        message: format!("Password worker failed: {}", e),
        location: ErrorLocation::from(Location::caller()),
    }
}
