//! Schedule repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::schedule::{self, ActiveModel, Entity as ScheduleEntity};
use common::{AppError, AppResult, OptionExt};
use domain::{NewSchedule, Schedule, TimeSlot};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Schedule repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Schedule>>;

    /// Sessions of an expo in start order
    async fn list(&self, expo_id: Uuid) -> AppResult<Vec<Schedule>>;

    async fn create(&self, schedule: NewSchedule) -> AppResult<Schedule>;

    /// Overwrite the editable fields of a session
    async fn update(
        &self,
        id: Uuid,
        session_name: Option<String>,
        time_slot: TimeSlot,
        speaker: Option<String>,
        location: Option<String>,
        description: Option<String>,
    ) -> AppResult<Schedule>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM implementation of ScheduleRepository
pub struct ScheduleStore {
    db: DatabaseConnection,
}

impl ScheduleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ScheduleRepository for ScheduleStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Schedule>> {
        let result = ScheduleEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Schedule::from))
    }

    async fn list(&self, expo_id: Uuid) -> AppResult<Vec<Schedule>> {
        let models = ScheduleEntity::find()
            .filter(schedule::Column::ExpoId.eq(expo_id))
            .order_by_asc(schedule::Column::StartTime)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Schedule::from).collect())
    }

    async fn create(&self, schedule: NewSchedule) -> AppResult<Schedule> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            expo_id: Set(schedule.expo_id),
            session_name: Set(schedule.session_name),
            start_time: Set(schedule.time_slot.start),
            end_time: Set(schedule.time_slot.end),
            speaker: Set(schedule.speaker),
            location: Set(schedule.location),
            description: Set(schedule.description),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Schedule::from(model))
    }

    async fn update(
        &self,
        id: Uuid,
        session_name: Option<String>,
        time_slot: TimeSlot,
        speaker: Option<String>,
        location: Option<String>,
        description: Option<String>,
    ) -> AppResult<Schedule> {
        let model = ScheduleEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found("Schedule")?;

        let mut active: ActiveModel = model.into();
        if let Some(name) = session_name {
            active.session_name = Set(name);
        }
        active.start_time = Set(time_slot.start);
        active.end_time = Set(time_slot.end);
        if let Some(speaker) = speaker {
            active.speaker = Set(speaker);
        }
        if let Some(location) = location {
            active.location = Set(location);
        }
        if let Some(description) = description {
            active.description = Set(description);
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Schedule::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ScheduleEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Schedule"));
        }

        Ok(())
    }
}
