//! Attendee service - Registration and badge issuance.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{generate_badge_id, normalize_email, Attendee, AttendeeStatus, NewAttendee};

use crate::repository::{AttendeeRepository, ExpoRepository};

/// Badge ids are random; a collision is retried with a fresh id
const BADGE_ATTEMPTS: usize = 3;

/// Attendee service trait for dependency injection.
#[async_trait]
pub trait AttendeeService: Send + Sync {
    /// Register an email for an expo and issue a badge
    async fn register(&self, registration: NewAttendee) -> AppResult<Attendee>;

    async fn get_attendee(&self, id: Uuid) -> AppResult<Attendee>;

    async fn find_by_badge(&self, badge_id: &str) -> AppResult<Attendee>;

    async fn list_attendees(&self, expo_id: Uuid) -> AppResult<Vec<Attendee>>;

    async fn set_attendee_status(&self, id: Uuid, status: AttendeeStatus) -> AppResult<Attendee>;

    async fn delete_attendee(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of AttendeeService using repositories.
pub struct AttendeeManager {
    attendees: Arc<dyn AttendeeRepository>,
    expos: Arc<dyn ExpoRepository>,
}

impl AttendeeManager {
    pub fn new(attendees: Arc<dyn AttendeeRepository>, expos: Arc<dyn ExpoRepository>) -> Self {
        Self { attendees, expos }
    }
}

fn already_registered(email: &str) -> AppError {
    AppError::conflict(format!("{} is already registered for this expo", email))
}

#[async_trait]
impl AttendeeService for AttendeeManager {
    async fn register(&self, mut registration: NewAttendee) -> AppResult<Attendee> {
        self.expos
            .find_by_id(registration.expo_id)
            .await?
            .ok_or_not_found("Expo")?;

        let email = normalize_email(&registration.email)?;
        let expo_id = registration.expo_id;
        if self.attendees.find_by_email(expo_id, &email).await?.is_some() {
            warn!(%expo_id, "Duplicate attendee registration");
            return Err(already_registered(&email));
        }
        registration.email = email.clone();

        let mut attempt = 1;
        loop {
            match self
                .attendees
                .create(registration.clone(), generate_badge_id())
                .await
            {
                Ok(attendee) => {
                    info!(attendee_id = %attendee.id, %expo_id, badge_id = %attendee.badge_id, "Attendee registered");
                    return Ok(attendee);
                }
                Err(e) if e.is_duplicate() => {
                    if self.attendees.find_by_email(expo_id, &email).await?.is_some() {
                        warn!(%expo_id, "Attendee registered by concurrent write");
                        return Err(already_registered(&email));
                    }
                    if attempt == BADGE_ATTEMPTS {
                        return Err(e);
                    }
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn get_attendee(&self, id: Uuid) -> AppResult<Attendee> {
        self.attendees
            .find_by_id(id)
            .await?
            .ok_or_not_found("Attendee")
    }

    async fn find_by_badge(&self, badge_id: &str) -> AppResult<Attendee> {
        self.attendees
            .find_by_badge(badge_id)
            .await?
            .ok_or_not_found("Attendee")
    }

    async fn list_attendees(&self, expo_id: Uuid) -> AppResult<Vec<Attendee>> {
        self.attendees.list(expo_id).await
    }

    async fn set_attendee_status(&self, id: Uuid, status: AttendeeStatus) -> AppResult<Attendee> {
        let updated = self.attendees.set_status(id, status).await?;
        info!(attendee_id = %id, %status, "Attendee status changed");
        Ok(updated)
    }

    async fn delete_attendee(&self, id: Uuid) -> AppResult<()> {
        self.attendees.delete(id).await
    }
}
