//! User domain entity and related types.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{ROLE_ADMIN, ROLE_ATTENDEE, ROLE_EXHIBITOR};
use crate::error::DomainError;

/// User roles enumeration.
///
/// Role names are matched exactly; an "organizer" role is not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Exhibitor,
    Attendee,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Check if this role can act with the required role.
    ///
    /// Admins can act as any role.
    pub fn can_access(&self, required: UserRole) -> bool {
        self.is_admin() || *self == required
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::Exhibitor => ROLE_EXHIBITOR,
            UserRole::Attendee => ROLE_ATTENDEE,
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            ROLE_ADMIN => Ok(UserRole::Admin),
            ROLE_EXHIBITOR => Ok(UserRole::Exhibitor),
            ROLE_ATTENDEE => Ok(UserRole::Attendee),
            _ => Err(DomainError::validation(format!("Unknown role '{}'", s))),
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
    /// User password (minimum 8 characters)
    pub password: String,
    /// Role granted to the user
    pub role: UserRole,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
    /// User role
    pub role: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role.to_string(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing_is_case_insensitive() {
        assert_eq!("Admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("exhibitor".parse::<UserRole>().unwrap(), UserRole::Exhibitor);
        assert_eq!("ATTENDEE".parse::<UserRole>().unwrap(), UserRole::Attendee);
    }

    #[test]
    fn test_organizer_is_not_a_role() {
        assert!("organizer".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_admin_can_access_everything() {
        assert!(UserRole::Admin.can_access(UserRole::Exhibitor));
        assert!(UserRole::Exhibitor.can_access(UserRole::Exhibitor));
        assert!(!UserRole::Attendee.can_access(UserRole::Exhibitor));
        assert!(!UserRole::Exhibitor.can_access(UserRole::Admin));
    }
}
