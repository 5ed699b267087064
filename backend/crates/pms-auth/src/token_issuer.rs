use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;
use std::time::Duration;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

/// Signs HS256 session tokens handed out on login.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    #[track_caller]
    pub fn issue(&self, user_id: Uuid, role: &str) -> AuthErrorResult<String> {
        let iat = Utc::now().timestamp();
        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            iat,
            exp: iat.saturating_add(ttl),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|source| {
            AuthError::JwtEncode {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
