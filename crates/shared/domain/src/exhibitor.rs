//! Exhibitor domain entity and approval state machine.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Exhibitor application status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ExhibitorStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Effect of requesting a status change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The status must be written
    Apply,
    /// Already in the requested state; nothing to write
    Unchanged,
}

impl ExhibitorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExhibitorStatus::Pending => "pending",
            ExhibitorStatus::Approved => "approved",
            ExhibitorStatus::Rejected => "rejected",
        }
    }

    /// Decide whether moving to `target` is allowed.
    ///
    /// Only `pending -> approved` and `pending -> rejected` exist. Requesting
    /// the current state again is a no-op so repeated approvals are
    /// deterministic.
    pub fn transition_to(self, target: ExhibitorStatus) -> DomainResult<Transition> {
        use ExhibitorStatus::*;

        match (self, target) {
            (from, to) if from == to => Ok(Transition::Unchanged),
            (Pending, Approved) | (Pending, Rejected) => Ok(Transition::Apply),
            (from, to) => Err(DomainError::InvalidTransition {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }
}

impl FromStr for ExhibitorStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ExhibitorStatus::Pending),
            "approved" => Ok(ExhibitorStatus::Approved),
            "rejected" => Ok(ExhibitorStatus::Rejected),
            other => Err(DomainError::validation(format!(
                "Unknown exhibitor status '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for ExhibitorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exhibitor contact details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

/// Exhibitor domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Exhibitor {
    pub id: Uuid,
    pub expo_id: Uuid,
    /// User who submitted the application
    pub user_id: Option<Uuid>,
    pub company_name: String,
    pub product_description: String,
    /// Booth chosen at application time; assignment happens on approval
    pub booth_selection: Option<Uuid>,
    pub status: ExhibitorStatus,
    pub contact_info: ContactInfo,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Exhibitor {
    pub fn is_pending(&self) -> bool {
        self.status == ExhibitorStatus::Pending
    }
}

/// Exhibitor application data
#[derive(Debug, Clone, Deserialize)]
pub struct NewExhibitor {
    pub expo_id: Uuid,
    pub user_id: Option<Uuid>,
    pub company_name: String,
    pub product_description: String,
    pub booth_selection: Option<Uuid>,
    pub contact_info: ContactInfo,
}

/// Editable exhibitor details. Status is not editable here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExhibitorChanges {
    pub company_name: Option<String>,
    pub product_description: Option<String>,
    /// `Some(None)` withdraws the selection
    pub booth_selection: Option<Option<Uuid>>,
    pub contact_info: Option<ContactInfo>,
}
