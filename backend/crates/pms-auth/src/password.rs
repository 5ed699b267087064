//! Argon2id password hashing and stored-password verification.
//!
//! Stored values come in three shapes: Argon2 PHC strings, bcrypt hashes this
//! server cannot check, and legacy plaintext left over from before hashing was
//! introduced. Only those exact scheme prefixes mark a hash; a plaintext
//! password that merely starts with `$` is still plaintext. Legacy values still authenticate so that users are
//! not locked out; callers are expected to upgrade them after a good login.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;
use std::sync::LazyLock;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use error_location::ErrorLocation;

/// Prefix of an Argon2 PHC string
pub const ARGON2_PREFIX: &str = "$argon2";

/// bcrypt variants, recognised so they are refused rather than compared as text
pub const BCRYPT_PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

/// Classification of a value found in the password column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredPassword<'a> {
    Argon2(&'a str),
    UnsupportedHash,
    LegacyPlaintext(&'a str),
}

impl<'a> StoredPassword<'a> {
    pub fn classify(stored: &'a str) -> Self {
        if stored.starts_with(ARGON2_PREFIX) {
            Self::Argon2(stored)
        } else if BCRYPT_PREFIXES.iter().any(|p| stored.starts_with(*p)) {
            Self::UnsupportedHash
        } else {
            Self::LegacyPlaintext(stored)
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::LegacyPlaintext(_))
    }
}

/// Outcome of checking a candidate password against a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordVerdict {
    Valid,
    /// Matched a legacy plaintext value; the caller should re-hash it
    ValidLegacy,
    Invalid,
    /// Stored value uses a hash scheme we cannot verify
    Unsupported,
}

impl PasswordVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid | Self::ValidLegacy)
    }
}

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string.
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Check `candidate` against whatever is stored for the user.
pub fn verify_stored_password(candidate: &str, stored: &str) -> AuthErrorResult<PasswordVerdict> {
    match StoredPassword::classify(stored) {
        StoredPassword::Argon2(hash) => verify_argon2(candidate, hash),
        StoredPassword::UnsupportedHash => {
            log::warn!("Stored password uses an unsupported hash scheme");
            Ok(PasswordVerdict::Unsupported)
        }
        StoredPassword::LegacyPlaintext(plain) => {
            if constant_time_eq(candidate.as_bytes(), plain.as_bytes()) {
                Ok(PasswordVerdict::ValidLegacy)
            } else {
                Ok(PasswordVerdict::Invalid)
            }
        }
    }
}

/// Argon2 hash checked when the account does not exist, so that an unknown
/// email costs the same as a wrong password.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("pms-dummy-password").ok());

/// Run a full Argon2 verification whose result is discarded.
pub fn verify_dummy_password(candidate: &str) {
    match DUMMY_HASH.as_deref() {
        Some(hash) => {
            let _ = verify_argon2(candidate, hash);
        }
        None => log::warn!("Dummy password hash unavailable; login timing is not equalized"),
    }
}

#[track_caller]
fn verify_argon2(candidate: &str, hash: &str) -> AuthErrorResult<PasswordVerdict> {
    let parsed = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("Stored Argon2 hash could not be parsed: {e}");
            return Ok(PasswordVerdict::Unsupported);
        }
    };

    match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
        Ok(()) => Ok(PasswordVerdict::Valid),
        Err(argon2::password_hash::Error::Password) => Ok(PasswordVerdict::Invalid),
        Err(e) => Err(AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Compare without short-circuiting on the first differing byte.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
