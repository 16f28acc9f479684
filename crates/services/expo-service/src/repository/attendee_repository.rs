//! Attendee repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::attendee::{self, ActiveModel, Entity as AttendeeEntity};
use super::into_domain;
use common::{AppError, AppResult, OptionExt};
use domain::{Attendee, AttendeeStatus, NewAttendee};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Attendee repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AttendeeRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Attendee>>;

    async fn find_by_badge(&self, badge_id: &str) -> AppResult<Option<Attendee>>;

    /// Find the registration of a (normalized) email for an expo
    async fn find_by_email(&self, expo_id: Uuid, email: &str) -> AppResult<Option<Attendee>>;

    async fn list(&self, expo_id: Uuid) -> AppResult<Vec<Attendee>>;

    /// Insert a registration. `attendee.email` must already be normalized.
    async fn create(&self, attendee: NewAttendee, badge_id: String) -> AppResult<Attendee>;

    async fn set_status(&self, id: Uuid, status: AttendeeStatus) -> AppResult<Attendee>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM implementation of AttendeeRepository
pub struct AttendeeStore {
    db: DatabaseConnection,
}

impl AttendeeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AttendeeRepository for AttendeeStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Attendee>> {
        AttendeeEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(into_domain)
            .transpose()
    }

    async fn find_by_badge(&self, badge_id: &str) -> AppResult<Option<Attendee>> {
        AttendeeEntity::find()
            .filter(attendee::Column::BadgeId.eq(badge_id))
            .one(&self.db)
            .await?
            .map(into_domain)
            .transpose()
    }

    async fn find_by_email(&self, expo_id: Uuid, email: &str) -> AppResult<Option<Attendee>> {
        AttendeeEntity::find()
            .filter(attendee::Column::ExpoId.eq(expo_id))
            .filter(attendee::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .map(into_domain)
            .transpose()
    }

    async fn list(&self, expo_id: Uuid) -> AppResult<Vec<Attendee>> {
        AttendeeEntity::find()
            .filter(attendee::Column::ExpoId.eq(expo_id))
            .order_by_asc(attendee::Column::RegistrationDate)
            .all(&self.db)
            .await?
            .into_iter()
            .map(into_domain)
            .collect()
    }

    async fn create(&self, attendee: NewAttendee, badge_id: String) -> AppResult<Attendee> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            expo_id: Set(attendee.expo_id),
            full_name: Set(attendee.full_name),
            email: Set(attendee.email),
            phone: Set(attendee.phone),
            organization: Set(attendee.organization),
            badge_id: Set(badge_id),
            status: Set(AttendeeStatus::Registered.as_str().to_string()),
            registration_date: Set(now),
            attachment: Set(attendee.attachment),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        into_domain(model)
    }

    async fn set_status(&self, id: Uuid, status: AttendeeStatus) -> AppResult<Attendee> {
        let model = AttendeeEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found("Attendee")?;

        let mut active: ActiveModel = model.into();
        active.status = Set(status.as_str().to_string());
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        into_domain(model)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = AttendeeEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Attendee"));
        }

        Ok(())
    }
}
