//! Booth service - Booth Allocator.
//!
//! A booth's floor must lie within its expo's floor count and its
//! (expo, floor, booth_number) key must be unique. The lookup before each
//! write only produces the friendly message; the unique index decides races,
//! and its violations are reported with the same message.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::booth::{booth_number_taken, ensure_floor_available};
use domain::{Booth, BoothChanges, BoothStatus, NewBooth};

use crate::repository::{BoothRepository, ExpoRepository};

/// Booth service trait for dependency injection.
#[async_trait]
pub trait BoothService: Send + Sync {
    async fn create_booth(&self, booth: NewBooth) -> AppResult<Booth>;

    async fn get_booth(&self, id: Uuid) -> AppResult<Booth>;

    async fn list_booths(
        &self,
        expo_id: Uuid,
        floor: Option<i32>,
        status: Option<BoothStatus>,
    ) -> AppResult<Vec<Booth>>;

    /// Update a booth, re-running placement checks when it moves
    async fn update_booth(&self, id: Uuid, changes: BoothChanges) -> AppResult<Booth>;

    async fn set_booth_status(&self, id: Uuid, status: BoothStatus) -> AppResult<Booth>;

    /// Delete a booth whether or not it is assigned
    async fn delete_booth(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of BoothService using repositories.
pub struct BoothManager {
    booths: Arc<dyn BoothRepository>,
    expos: Arc<dyn ExpoRepository>,
}

impl BoothManager {
    pub fn new(booths: Arc<dyn BoothRepository>, expos: Arc<dyn ExpoRepository>) -> Self {
        Self { booths, expos }
    }

    async fn ensure_number_free(
        &self,
        expo_id: Uuid,
        floor: i32,
        booth_number: &str,
        exclude: Option<Uuid>,
    ) -> AppResult<()> {
        if self
            .booths
            .find_by_key(expo_id, floor, booth_number, exclude)
            .await?
            .is_some()
        {
            warn!(%expo_id, floor, booth_number, "Booth number already taken");
            return Err(booth_number_taken(floor, booth_number).into());
        }
        Ok(())
    }
}

/// Map a unique-index rejection onto the same conflict the lookup reports
fn translate_duplicate(err: AppError, floor: i32, booth_number: &str) -> AppError {
    if err.is_duplicate() {
        warn!(floor, booth_number, "Booth number taken by concurrent write");
        booth_number_taken(floor, booth_number).into()
    } else {
        err
    }
}

#[async_trait]
impl BoothService for BoothManager {
    async fn create_booth(&self, booth: NewBooth) -> AppResult<Booth> {
        booth.validate()?;

        let expo = self
            .expos
            .find_by_id(booth.expo_id)
            .await?
            .ok_or_not_found("Expo")?;
        ensure_floor_available(&expo, booth.floor)?;

        let floor = booth.floor;
        let number = booth.booth_number.trim().to_string();
        self.ensure_number_free(expo.id, floor, &number, None).await?;

        let created = self
            .booths
            .create(booth)
            .await
            .map_err(|e| translate_duplicate(e, floor, &number))?;

        info!(booth_id = %created.id, expo_id = %expo.id, floor, booth_number = %number, "Booth created");
        Ok(created)
    }

    async fn get_booth(&self, id: Uuid) -> AppResult<Booth> {
        self.booths.find_by_id(id).await?.ok_or_not_found("Booth")
    }

    async fn list_booths(
        &self,
        expo_id: Uuid,
        floor: Option<i32>,
        status: Option<BoothStatus>,
    ) -> AppResult<Vec<Booth>> {
        self.booths.list(expo_id, floor, status).await
    }

    async fn update_booth(&self, id: Uuid, changes: BoothChanges) -> AppResult<Booth> {
        let current = self.get_booth(id).await?;
        changes.validate(&current)?;

        let expo_id = changes.expo_id.unwrap_or(current.expo_id);
        let floor = changes.floor.unwrap_or(current.floor);
        let number = changes
            .booth_number
            .as_deref()
            .map(str::trim)
            .unwrap_or(&current.booth_number)
            .to_string();

        if changes.relocates(&current) {
            let expo = self
                .expos
                .find_by_id(expo_id)
                .await?
                .ok_or_not_found("Expo")?;
            ensure_floor_available(&expo, floor)?;
        }
        if changes.changes_key(&current) {
            self.ensure_number_free(expo_id, floor, &number, Some(id))
                .await?;
        }

        let updated = self
            .booths
            .update(id, changes)
            .await
            .map_err(|e| translate_duplicate(e, floor, &number))?;

        info!(booth_id = %id, "Booth updated");
        Ok(updated)
    }

    async fn set_booth_status(&self, id: Uuid, status: BoothStatus) -> AppResult<Booth> {
        let changes = BoothChanges {
            status: Some(status),
            ..Default::default()
        };
        let updated = self.booths.update(id, changes).await?;
        info!(booth_id = %id, %status, "Booth status changed");
        Ok(updated)
    }

    async fn delete_booth(&self, id: Uuid) -> AppResult<()> {
        self.booths.delete(id).await?;
        info!(booth_id = %id, "Booth deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use mockall::predicate::eq;

    use super::*;
    use crate::repository::{MockBoothRepository, MockExpoRepository};
    use domain::{Expo, ExpoStatus, SizeUnit};

    fn expo(floors: i32) -> Expo {
        Expo {
            id: Uuid::new_v4(),
            title: "Build Expo".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            location: "Center".to_string(),
            description: String::new(),
            theme: String::new(),
            status: ExpoStatus::Upcoming,
            floors,
            image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn new_booth(expo_id: Uuid, floor: i32, number: &str) -> NewBooth {
        NewBooth {
            expo_id,
            floor,
            booth_number: number.to_string(),
            length: 10.0,
            width: 8.0,
            size_unit: SizeUnit::Ft,
            status: BoothStatus::Available,
            price: None,
            has_power: true,
            has_wifi: false,
            is_corner_booth: false,
            notes: String::new(),
        }
    }

    fn booth_from(new: &NewBooth) -> Booth {
        Booth {
            id: Uuid::new_v4(),
            expo_id: new.expo_id,
            assigned_to: None,
            floor: new.floor,
            booth_number: new.booth_number.clone(),
            length: new.length,
            width: new.width,
            size_unit: new.size_unit,
            status: new.status,
            price: new.price,
            has_power: new.has_power,
            has_wifi: new.has_wifi,
            is_corner_booth: new.is_corner_booth,
            notes: new.notes.clone(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn expos_returning(expo: Expo) -> MockExpoRepository {
        let mut expos = MockExpoRepository::new();
        expos
            .expect_find_by_id()
            .with(eq(expo.id))
            .returning(move |_| Ok(Some(expo.clone())));
        expos
    }

    #[tokio::test]
    async fn test_floor_above_expo_floors_never_written() {
        let expo = expo(2);
        let expo_id = expo.id;

        let mut booths = MockBoothRepository::new();
        booths.expect_find_by_key().never();
        booths.expect_create().never();

        let service = BoothManager::new(Arc::new(booths), Arc::new(expos_returning(expo)));
        let err = service
            .create_booth(new_booth(expo_id, 3, "A1"))
            .await
            .unwrap_err();

        assert_eq!(
            err.user_message(),
            "Floor 3 is not available for this expo. Maximum floors: 2"
        );
        assert_eq!(err.details().unwrap()["max_floors"], 2);
    }

    #[tokio::test]
    async fn test_missing_expo_is_not_found() {
        let mut expos = MockExpoRepository::new();
        expos.expect_find_by_id().returning(|_| Ok(None));
        let mut booths = MockBoothRepository::new();
        booths.expect_create().never();

        let service = BoothManager::new(Arc::new(booths), Arc::new(expos));
        let err = service
            .create_booth(new_booth(Uuid::new_v4(), 1, "A1"))
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Expo not found");
    }

    #[tokio::test]
    async fn test_taken_number_rejected_before_write() {
        let expo = expo(2);
        let expo_id = expo.id;
        let existing = booth_from(&new_booth(expo_id, 1, "A1"));

        let mut booths = MockBoothRepository::new();
        booths
            .expect_find_by_key()
            .withf(move |id, floor, number, exclude| {
                *id == expo_id && *floor == 1 && number == "A1" && exclude.is_none()
            })
            .returning(move |_, _, _, _| Ok(Some(existing.clone())));
        booths.expect_create().never();

        let service = BoothManager::new(Arc::new(booths), Arc::new(expos_returning(expo)));
        let err = service
            .create_booth(new_booth(expo_id, 1, " A1 "))
            .await
            .unwrap_err();

        assert_eq!(
            err.user_message(),
            "Booth number A1 already exists on floor 1 for this expo"
        );
    }

    #[tokio::test]
    async fn test_store_duplicate_reported_as_same_conflict() {
        let expo = expo(2);
        let expo_id = expo.id;

        let mut booths = MockBoothRepository::new();
        booths.expect_find_by_key().returning(|_, _, _, _| Ok(None));
        booths.expect_create().returning(|_| {
            Err(AppError::Duplicate(
                "idx_booths_expo_floor_number".to_string(),
            ))
        });

        let service = BoothManager::new(Arc::new(booths), Arc::new(expos_returning(expo)));
        let err = service
            .create_booth(new_booth(expo_id, 2, "B4"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(
            err.user_message(),
            "Booth number B4 already exists on floor 2 for this expo"
        );
    }

    #[tokio::test]
    async fn test_relocation_rechecks_new_expo_floors() {
        let source = expo(3);
        let target = expo(1);
        let current = Booth {
            floor: 2,
            ..booth_from(&new_booth(source.id, 2, "C3"))
        };
        let booth_id = current.id;

        let mut booths = MockBoothRepository::new();
        booths
            .expect_find_by_id()
            .returning(move |_| Ok(Some(current.clone())));
        booths.expect_update().never();

        let service = BoothManager::new(Arc::new(booths), Arc::new(expos_returning(target.clone())));
        let changes = BoothChanges {
            expo_id: Some(target.id),
            ..Default::default()
        };
        let err = service.update_booth(booth_id, changes).await.unwrap_err();

        assert_eq!(
            err.user_message(),
            "Floor 2 is not available for this expo. Maximum floors: 1"
        );
    }
}
