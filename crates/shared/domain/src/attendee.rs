//! Attendee domain entity and badge generation.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{BADGE_PREFIX, BADGE_RANDOM_LEN};
use crate::error::{DomainError, DomainResult};

/// Attendee registration status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum AttendeeStatus {
    #[default]
    Registered,
    Cancelled,
    CheckedIn,
}

impl AttendeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendeeStatus::Registered => "registered",
            AttendeeStatus::Cancelled => "cancelled",
            AttendeeStatus::CheckedIn => "checked_in",
        }
    }
}

impl FromStr for AttendeeStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registered" => Ok(AttendeeStatus::Registered),
            "cancelled" => Ok(AttendeeStatus::Cancelled),
            "checked_in" => Ok(AttendeeStatus::CheckedIn),
            other => Err(DomainError::validation(format!(
                "Unknown attendee status '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for AttendeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attendee domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Attendee {
    pub id: Uuid,
    pub expo_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub badge_id: String,
    pub status: AttendeeStatus,
    pub registration_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Attendee registration data
#[derive(Debug, Clone, Deserialize)]
pub struct NewAttendee {
    pub expo_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub attachment: Option<String>,
}

/// Canonical form of an email used for the per-expo uniqueness check
pub fn normalize_email(email: &str) -> DomainResult<String> {
    let normalized = email.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(DomainError::validation("Email cannot be empty"));
    }
    Ok(normalized)
}

/// Generate a new badge identifier such as `BDG-3F9A0C12D4E7`
pub fn generate_badge_id() -> String {
    let random = Uuid::new_v4().simple().to_string().to_uppercase();
    let suffix: String = random.chars().take(BADGE_RANDOM_LEN).collect();
    format!("{}{}", BADGE_PREFIX, suffix)
}
