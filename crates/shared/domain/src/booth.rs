//! Booth domain entity and allocation rules.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::FIRST_FLOOR;
use crate::error::{DomainError, DomainResult};
use crate::expo::Expo;

/// Booth availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum BoothStatus {
    #[default]
    Available,
    Reserved,
    Booked,
    UnderMaintenance,
}

impl BoothStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoothStatus::Available => "available",
            BoothStatus::Reserved => "reserved",
            BoothStatus::Booked => "booked",
            BoothStatus::UnderMaintenance => "under_maintenance",
        }
    }
}

impl FromStr for BoothStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(BoothStatus::Available),
            "reserved" => Ok(BoothStatus::Reserved),
            "booked" => Ok(BoothStatus::Booked),
            "under_maintenance" => Ok(BoothStatus::UnderMaintenance),
            other => Err(DomainError::validation(format!("Unknown booth status '{}'", other))),
        }
    }
}

impl fmt::Display for BoothStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit of booth length and width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    #[default]
    Ft,
    M,
}

impl SizeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeUnit::Ft => "ft",
            SizeUnit::M => "m",
        }
    }
}

impl FromStr for SizeUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ft" => Ok(SizeUnit::Ft),
            "m" => Ok(SizeUnit::M),
            other => Err(DomainError::validation(format!("Unknown size unit '{}'", other))),
        }
    }
}

/// Booth domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Booth {
    pub id: Uuid,
    pub expo_id: Uuid,
    /// Exhibitor the booth was assigned to on approval
    pub assigned_to: Option<Uuid>,
    pub floor: i32,
    pub booth_number: String,
    pub length: f64,
    pub width: f64,
    pub size_unit: SizeUnit,
    pub status: BoothStatus,
    pub price: Option<Decimal>,
    pub has_power: bool,
    pub has_wifi: bool,
    pub is_corner_booth: bool,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booth {
    pub fn is_assigned(&self) -> bool {
        self.assigned_to.is_some()
    }
}

/// Booth creation data
#[derive(Debug, Clone, Deserialize)]
pub struct NewBooth {
    pub expo_id: Uuid,
    pub floor: i32,
    pub booth_number: String,
    pub length: f64,
    pub width: f64,
    #[serde(default)]
    pub size_unit: SizeUnit,
    #[serde(default)]
    pub status: BoothStatus,
    pub price: Option<Decimal>,
    #[serde(default)]
    pub has_power: bool,
    #[serde(default)]
    pub has_wifi: bool,
    #[serde(default)]
    pub is_corner_booth: bool,
    #[serde(default)]
    pub notes: String,
}

impl NewBooth {
    /// Validate field shapes that do not depend on other records
    pub fn validate(&self) -> DomainResult<()> {
        validate_floor(self.floor)?;
        validate_booth_number(&self.booth_number)?;
        validate_dimensions(self.length, self.width)
    }
}

/// Partial booth update; `None` leaves a field untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoothChanges {
    pub expo_id: Option<Uuid>,
    pub floor: Option<i32>,
    pub booth_number: Option<String>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub size_unit: Option<SizeUnit>,
    pub status: Option<BoothStatus>,
    /// `Some(None)` clears the price
    pub price: Option<Option<Decimal>>,
    pub has_power: Option<bool>,
    pub has_wifi: Option<bool>,
    pub is_corner_booth: Option<bool>,
    pub notes: Option<String>,
}

impl BoothChanges {
    /// Whether the update moves the booth to another expo or floor
    pub fn relocates(&self, current: &Booth) -> bool {
        self.changes_expo(current)
            || self.floor.is_some_and(|floor| floor != current.floor)
    }

    /// Whether the update moves the booth to another expo
    pub fn changes_expo(&self, current: &Booth) -> bool {
        self.expo_id.is_some_and(|id| id != current.expo_id)
    }

    /// Whether the (expo, floor, booth_number) key changes
    pub fn changes_key(&self, current: &Booth) -> bool {
        self.relocates(current)
            || self
                .booth_number
                .as_deref()
                .is_some_and(|number| number.trim() != current.booth_number)
    }

    pub fn validate(&self, current: &Booth) -> DomainResult<()> {
        if let Some(floor) = self.floor {
            validate_floor(floor)?;
        }
        if let Some(number) = &self.booth_number {
            validate_booth_number(number)?;
        }
        validate_dimensions(
            self.length.unwrap_or(current.length),
            self.width.unwrap_or(current.width),
        )
    }
}

/// Ensure a booth floor lies within the floors booked by its expo
pub fn ensure_floor_available(expo: &Expo, floor: i32) -> DomainResult<()> {
    if expo.has_floor(floor) {
        Ok(())
    } else {
        Err(DomainError::FloorNotAvailable {
            floor,
            max_floors: expo.floors,
        })
    }
}

/// Conflict raised when a booth number is already used on a floor
pub fn booth_number_taken(floor: i32, booth_number: &str) -> DomainError {
    DomainError::conflict(format!(
        "Booth number {} already exists on floor {} for this expo",
        booth_number, floor
    ))
}

/// Conflict raised when an expo would shrink below one of its booths
pub fn booths_above_floor(floors: i32, highest: i32) -> DomainError {
    DomainError::conflict(format!(
        "Cannot reduce floors to {}: booths exist on floor {}",
        floors, highest
    ))
}

/// Conflict raised when a claimed booth would move to another expo
pub fn booth_claimed(booth_number: &str) -> DomainError {
    DomainError::conflict(format!(
        "Booth {} is selected by an exhibitor and cannot move to another expo",
        booth_number
    ))
}

fn validate_floor(floor: i32) -> DomainResult<()> {
    if floor < FIRST_FLOOR {
        return Err(DomainError::validation(format!(
            "Floor must be at least {}",
            FIRST_FLOOR
        )));
    }
    Ok(())
}

fn validate_booth_number(number: &str) -> DomainResult<()> {
    if number.trim().is_empty() {
        return Err(DomainError::validation("Booth number cannot be empty"));
    }
    Ok(())
}

fn validate_dimensions(length: f64, width: f64) -> DomainResult<()> {
    let positive = |v: f64| v.is_finite() && v > 0.0;
    if !positive(length) || !positive(width) {
        return Err(DomainError::validation("Booth length and width must be positive"));
    }
    Ok(())
}
