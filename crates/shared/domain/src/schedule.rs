//! Schedule (expo session) domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Session time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeSlot {
    /// Create a slot, rejecting empty or inverted windows
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> DomainResult<Self> {
        if start >= end {
            return Err(DomainError::validation("Session start must be before its end"));
        }
        Ok(Self { start, end })
    }
}

/// Schedule domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Schedule {
    pub id: Uuid,
    pub expo_id: Uuid,
    pub session_name: String,
    pub time_slot: TimeSlot,
    pub speaker: String,
    pub location: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Schedule creation data
#[derive(Debug, Clone, Deserialize)]
pub struct NewSchedule {
    pub expo_id: Uuid,
    pub session_name: String,
    pub time_slot: TimeSlot,
    pub speaker: String,
    pub location: String,
    pub description: String,
}

/// Partial schedule update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleChanges {
    pub session_name: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub speaker: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl ScheduleChanges {
    /// Time slot after applying the changes to `current`
    pub fn time_slot_after(&self, current: &TimeSlot) -> DomainResult<TimeSlot> {
        TimeSlot::new(
            self.start.unwrap_or(current.start),
            self.end.unwrap_or(current.end),
        )
    }
}
