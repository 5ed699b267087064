pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod password;
pub mod token_issuer;

pub use bearer::extract_bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use password::{
    ARGON2_PREFIX, BCRYPT_PREFIXES, PasswordVerdict, StoredPassword, hash_password,
    verify_dummy_password, verify_stored_password,
};
pub use token_issuer::TokenIssuer;

/// Minimum HS256 secret length accepted by the validator and issuer
pub const MIN_SECRET_LEN: usize = 32;
