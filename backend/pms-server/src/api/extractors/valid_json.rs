//! JSON body extractor with the API's error format

use crate::ApiError;

use std::future::Future;
use std::panic::Location;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but a malformed body becomes a 400 `BAD_REQUEST`
/// in the usual error envelope instead of axum's plain-text rejection.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(ValidJson(value)),
                Err(rejection) => Err(ApiError::BadRequest {
                    message: format!("Invalid JSON body: {}", rejection.body_text()),
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        }
    }
}
