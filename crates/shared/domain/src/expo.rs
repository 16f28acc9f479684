//! Expo domain entity and related types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Expo lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ExpoStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl ExpoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpoStatus::Upcoming => "upcoming",
            ExpoStatus::Ongoing => "ongoing",
            ExpoStatus::Completed => "completed",
            ExpoStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for ExpoStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(ExpoStatus::Upcoming),
            "ongoing" => Ok(ExpoStatus::Ongoing),
            "completed" => Ok(ExpoStatus::Completed),
            "cancelled" => Ok(ExpoStatus::Cancelled),
            other => Err(DomainError::validation(format!("Unknown expo status '{}'", other))),
        }
    }
}

impl fmt::Display for ExpoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expo domain entity.
///
/// `floors` is the number of venue floors booked for `date`, not a floor
/// number. Booth floor numbers are bounded by it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Expo {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub location: String,
    pub description: String,
    pub theme: String,
    pub status: ExpoStatus,
    pub floors: i32,
    /// Opaque path of the uploaded expo image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expo {
    /// Summary used when reporting placement conflicts
    pub fn summary(&self) -> ExpoSummary {
        ExpoSummary {
            id: self.id,
            title: self.title.clone(),
            date: self.date,
            floors: self.floors,
        }
    }

    /// Check whether a booth floor number lies within the booked floors
    pub fn has_floor(&self, floor: i32) -> bool {
        floor >= crate::FIRST_FLOOR && floor <= self.floors
    }
}

/// Identifying details of an existing expo, returned with conflicts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExpoSummary {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub floors: i32,
}

/// Outcome of the expo conflict guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementCheck {
    /// No other expo holds the (date, floors) slot
    Ok,
    /// The slot is held by the given expo
    Conflict(ExpoSummary),
}

impl PlacementCheck {
    pub fn is_ok(&self) -> bool {
        matches!(self, PlacementCheck::Ok)
    }

    /// Turn a conflict into a domain error
    pub fn into_result(self) -> DomainResult<()> {
        match self {
            PlacementCheck::Ok => Ok(()),
            PlacementCheck::Conflict(existing) => Err(DomainError::ExpoConflict(existing)),
        }
    }
}

/// Expo creation data
#[derive(Debug, Clone, Deserialize)]
pub struct NewExpo {
    pub title: String,
    pub date: NaiveDate,
    pub location: String,
    pub description: String,
    pub theme: String,
    pub floors: i32,
    pub image: Option<String>,
}

/// Partial expo update; `None` leaves a field untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpoChanges {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub theme: Option<String>,
    pub status: Option<ExpoStatus>,
    pub floors: Option<i32>,
    pub image: Option<String>,
}

impl ExpoChanges {
    /// Resulting (date, floors) slot if the changes move the expo, `None` otherwise
    pub fn placement_after(&self, current: &Expo) -> Option<(NaiveDate, i32)> {
        let date = self.date.unwrap_or(current.date);
        let floors = self.floors.unwrap_or(current.floors);
        if date == current.date && floors == current.floors {
            None
        } else {
            Some((date, floors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expo(date: NaiveDate, floors: i32) -> Expo {
        Expo {
            id: Uuid::new_v4(),
            title: "Tech Expo".to_string(),
            date,
            location: "Hall A".to_string(),
            description: String::new(),
            theme: "Technology".to_string(),
            status: ExpoStatus::Upcoming,
            floors,
            image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [
            ExpoStatus::Upcoming,
            ExpoStatus::Ongoing,
            ExpoStatus::Completed,
            ExpoStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<ExpoStatus>().unwrap(), status);
        }
        assert!("postponed".parse::<ExpoStatus>().is_err());
    }

    #[test]
    fn test_has_floor_bounds() {
        let expo = expo(day(1), 2);
        assert!(!expo.has_floor(0));
        assert!(expo.has_floor(1));
        assert!(expo.has_floor(2));
        assert!(!expo.has_floor(3));
    }

    #[test]
    fn test_placement_after_only_when_slot_moves() {
        let current = expo(day(1), 2);

        let rename = ExpoChanges {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        assert_eq!(rename.placement_after(&current), None);

        let same_values = ExpoChanges {
            date: Some(day(1)),
            floors: Some(2),
            ..Default::default()
        };
        assert_eq!(same_values.placement_after(&current), None);

        let moved = ExpoChanges {
            floors: Some(3),
            ..Default::default()
        };
        assert_eq!(moved.placement_after(&current), Some((day(1), 3)));
    }

    #[test]
    fn test_conflict_message_names_existing_expo() {
        let existing = expo(day(1), 2);
        let err = PlacementCheck::Conflict(existing.summary())
            .into_result()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "An expo already exists on 2025-06-01 with 2 floors: \"Tech Expo\""
        );
    }
}
