//! User account record.

use crate::UserRole;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A user account.
///
/// Deliberately not `Serialize`: the stored password must never leave the
/// server, so responses go through a dedicated DTO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Unique company-issued code (e.g. "ADMIN001")
    pub employee_code: String,
    /// Unique, always stored lowercase
    pub email: String,
    /// Argon2 PHC string, or a legacy plaintext value awaiting upgrade
    pub stored_password: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        name: String,
        employee_code: String,
        email: &str,
        stored_password: String,
        role: UserRole,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            employee_code,
            email: Self::normalize_email(email),
            stored_password,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Emails are compared case-insensitively by storing them lowercase
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
