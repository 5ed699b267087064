use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Pull the token out of an `Authorization: Bearer <token>` header value.
#[track_caller]
pub fn extract_bearer_token(header: Option<&str>) -> AuthErrorResult<&str> {
    let header = header.ok_or_else(|| AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    })?;

    let token = header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })?
        .trim();

    if token.is_empty() {
        return Err(AuthError::InvalidToken {
            message: "empty bearer token".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(token)
}
