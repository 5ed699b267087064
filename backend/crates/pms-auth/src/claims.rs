use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Role of the user at login time
    pub role: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if Uuid::parse_str(&self.sub).is_err() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub is not a valid user id".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.role.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "role".to_string(),
                message: "role cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
