//! Schedule service - Expo sessions.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use common::{AppResult, OptionExt};
use domain::{NewSchedule, Schedule, ScheduleChanges, TimeSlot};

use crate::repository::{ExpoRepository, ScheduleRepository};

/// Schedule service trait for dependency injection.
#[async_trait]
pub trait ScheduleService: Send + Sync {
    async fn create_schedule(&self, schedule: NewSchedule) -> AppResult<Schedule>;

    async fn get_schedule(&self, id: Uuid) -> AppResult<Schedule>;

    /// Sessions of an expo ordered by start time
    async fn list_schedules(&self, expo_id: Uuid) -> AppResult<Vec<Schedule>>;

    async fn update_schedule(&self, id: Uuid, changes: ScheduleChanges) -> AppResult<Schedule>;

    async fn delete_schedule(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ScheduleService using repositories.
pub struct ScheduleManager {
    schedules: Arc<dyn ScheduleRepository>,
    expos: Arc<dyn ExpoRepository>,
}

impl ScheduleManager {
    pub fn new(schedules: Arc<dyn ScheduleRepository>, expos: Arc<dyn ExpoRepository>) -> Self {
        Self { schedules, expos }
    }
}

#[async_trait]
impl ScheduleService for ScheduleManager {
    async fn create_schedule(&self, mut schedule: NewSchedule) -> AppResult<Schedule> {
        schedule.time_slot = TimeSlot::new(schedule.time_slot.start, schedule.time_slot.end)?;
        self.expos
            .find_by_id(schedule.expo_id)
            .await?
            .ok_or_not_found("Expo")?;

        let created = self.schedules.create(schedule).await?;
        info!(schedule_id = %created.id, expo_id = %created.expo_id, "Session scheduled");
        Ok(created)
    }

    async fn get_schedule(&self, id: Uuid) -> AppResult<Schedule> {
        self.schedules
            .find_by_id(id)
            .await?
            .ok_or_not_found("Schedule")
    }

    async fn list_schedules(&self, expo_id: Uuid) -> AppResult<Vec<Schedule>> {
        self.schedules.list(expo_id).await
    }

    async fn update_schedule(&self, id: Uuid, changes: ScheduleChanges) -> AppResult<Schedule> {
        let current = self.get_schedule(id).await?;
        let time_slot = changes.time_slot_after(&current.time_slot)?;

        self.schedules
            .update(
                id,
                changes.session_name,
                time_slot,
                changes.speaker,
                changes.location,
                changes.description,
            )
            .await
    }

    async fn delete_schedule(&self, id: Uuid) -> AppResult<()> {
        self.schedules.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::repository::{MockExpoRepository, MockScheduleRepository};

    #[tokio::test]
    async fn test_inverted_slot_rejected_before_lookup() {
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 14, 0, 0).unwrap();

        let mut expos = MockExpoRepository::new();
        expos.expect_find_by_id().never();
        let mut schedules = MockScheduleRepository::new();
        schedules.expect_create().never();

        let service = ScheduleManager::new(Arc::new(schedules), Arc::new(expos));
        let err = service
            .create_schedule(NewSchedule {
                expo_id: Uuid::new_v4(),
                session_name: "Keynote".to_string(),
                time_slot: TimeSlot {
                    start,
                    end: start - Duration::minutes(30),
                },
                speaker: "Grace Hopper".to_string(),
                location: "Main Stage".to_string(),
                description: String::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), "VALIDATION_ERROR");
    }
}
