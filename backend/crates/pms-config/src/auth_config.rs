use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_TOKEN_TTL_SECS,
    MIN_JWT_SECRET_LENGTH,
};

use serde::Deserialize;

/// Session token settings. When disabled the server trusts the
/// `userId`/`role` query parameters sent by the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// HS256 signing secret
    pub jwt_secret: Option<String>,
    pub token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        let secret = self.jwt_secret.as_deref().ok_or_else(|| {
            ConfigError::auth("auth.enabled = true requires auth.jwt_secret")
        })?;

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if self.token_ttl_secs == 0 {
            return Err(ConfigError::auth("auth.token_ttl_secs must be > 0"));
        }

        Ok(())
    }
}
