//! Read scope for the per-user filtered list endpoints.

use crate::{CoreResult, UserRole, parse_uuid};

use uuid::Uuid;

/// Which documents a caller may see on the filtered list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessScope {
    /// Every document (admins, or callers that did not identify themselves)
    All,
    /// Only documents that reference this user
    User(Uuid),
}

impl AccessScope {
    /// Build a scope from the `userId` / `role` query parameters.
    ///
    /// No `userId`, or a role of `Admin`, yields [`AccessScope::All`].
    #[track_caller]
    pub fn from_query(user_id: Option<&str>, role: Option<&str>) -> CoreResult<Self> {
        let user_id = match user_id.map(str::trim).filter(|s| !s.is_empty()) {
            Some(id) => id,
            None => return Ok(Self::All),
        };

        if role.is_some_and(|r| r.trim() == UserRole::Admin.as_str()) {
            return Ok(Self::All);
        }

        Ok(Self::User(parse_uuid(user_id, "userId")?))
    }

    /// Build a scope from an authenticated identity.
    pub fn for_identity(user_id: Uuid, role: &str) -> Self {
        if role == UserRole::Admin.as_str() {
            Self::All
        } else {
            Self::User(user_id)
        }
    }

    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Self::All => None,
            Self::User(id) => Some(*id),
        }
    }
}
