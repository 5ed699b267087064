//! Caller scope for the filtered list endpoints

use crate::{ApiError, AppState};

use pms_auth::extract_bearer_token;
use pms_core::AccessScope;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::{FromRequestParts, Query},
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;
use serde::Deserialize;

/// `?userId=&role=` as sent by the web client
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeQuery {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Which documents the caller may list.
///
/// With session tokens enabled the scope comes from the verified bearer
/// token and the query parameters are ignored. Otherwise the client-supplied
/// `userId` / `role` are trusted.
pub struct RequestScope(pub AccessScope);

impl FromRequestParts<AppState> for RequestScope {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            if let Some(validator) = state.jwt_validator.as_ref() {
                let header = parts
                    .headers
                    .get(AUTHORIZATION)
                    .and_then(|value| value.to_str().ok());
                let token = extract_bearer_token(header)?;
                let claims = validator.validate(token)?;
                let user_id = claims.user_id()?;

                log::debug!("Scope from session token: user {}", user_id);
                return Ok(RequestScope(AccessScope::for_identity(
                    user_id,
                    &claims.role,
                )));
            }

            let Query(query) =
                Query::<ScopeQuery>::try_from_uri(&parts.uri).map_err(|e| {
                    ApiError::BadRequest {
                        message: format!("Invalid query string: {}", e.body_text()),
                        location: ErrorLocation::from(Location::caller()),
                    }
                })?;

            let scope = AccessScope::from_query(query.user_id.as_deref(), query.role.as_deref())?;
            Ok(RequestScope(scope))
        }
    }
}
