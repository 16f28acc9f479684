//! Expo service - Expo Conflict Guard and Floor Availability Checker.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::booth::booths_above_floor;
use domain::{
    DomainError, Expo, ExpoChanges, ExpoStatus, FloorAvailability, FloorUniverse, NewExpo,
    PlacementCheck,
};

use crate::repository::{BoothRepository, ExpoRepository};

/// Expo service trait for dependency injection.
#[async_trait]
pub trait ExpoService: Send + Sync {
    /// Whether an expo may occupy (date, floors), ignoring `exclude`
    async fn check_placement(
        &self,
        date: NaiveDate,
        floors: i32,
        exclude: Option<Uuid>,
    ) -> AppResult<PlacementCheck>;

    /// Floor counts still free on `date`
    async fn available_floors(&self, date: NaiveDate) -> AppResult<FloorAvailability>;

    async fn create_expo(&self, expo: NewExpo) -> AppResult<Expo>;

    async fn get_expo(&self, id: Uuid) -> AppResult<Expo>;

    async fn list_expos(&self, status: Option<ExpoStatus>) -> AppResult<Vec<Expo>>;

    async fn update_expo(&self, id: Uuid, changes: ExpoChanges) -> AppResult<Expo>;

    async fn set_expo_status(&self, id: Uuid, status: ExpoStatus) -> AppResult<Expo>;

    /// Delete an expo; booths, exhibitors, attendees and sessions go with it
    async fn delete_expo(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ExpoService using repositories.
pub struct ExpoManager {
    expos: Arc<dyn ExpoRepository>,
    booths: Arc<dyn BoothRepository>,
    floors: FloorUniverse,
}

impl ExpoManager {
    pub fn new(
        expos: Arc<dyn ExpoRepository>,
        booths: Arc<dyn BoothRepository>,
        floors: FloorUniverse,
    ) -> Self {
        Self {
            expos,
            booths,
            floors,
        }
    }

    /// Conflict for a slot the store refused, naming the holder when it can
    async fn slot_taken(&self, date: NaiveDate, floors: i32, exclude: Option<Uuid>) -> AppError {
        warn!(%date, floors, "Expo slot taken by concurrent write");
        match self.expos.find_by_slot(date, floors, exclude).await {
            Ok(Some(existing)) => DomainError::ExpoConflict(existing.summary()).into(),
            Ok(None) => AppError::conflict(format!(
                "An expo already exists on {} with {} floors",
                date, floors
            )),
            Err(e) => e,
        }
    }

    /// Refuse to shrink an expo below a floor that already has booths
    async fn ensure_booths_fit(&self, id: Uuid, floors: i32) -> AppResult<()> {
        if let Some(highest) = self.booths.highest_floor(id).await? {
            if highest > floors {
                return Err(booths_above_floor(floors, highest).into());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ExpoService for ExpoManager {
    async fn check_placement(
        &self,
        date: NaiveDate,
        floors: i32,
        exclude: Option<Uuid>,
    ) -> AppResult<PlacementCheck> {
        let check = match self.expos.find_by_slot(date, floors, exclude).await? {
            Some(existing) => PlacementCheck::Conflict(existing.summary()),
            None => PlacementCheck::Ok,
        };
        Ok(check)
    }

    async fn available_floors(&self, date: NaiveDate) -> AppResult<FloorAvailability> {
        let claimed = self.expos.floors_on(date).await?;
        Ok(self.floors.availability(claimed))
    }

    async fn create_expo(&self, expo: NewExpo) -> AppResult<Expo> {
        self.floors.validate_floor_count(expo.floors)?;

        let (date, floors) = (expo.date, expo.floors);
        if let PlacementCheck::Conflict(existing) = self.check_placement(date, floors, None).await? {
            warn!(%date, floors, existing = %existing.id, "Expo slot already booked");
            return Err(DomainError::ExpoConflict(existing).into());
        }

        match self.expos.create(expo).await {
            Ok(created) => {
                info!(expo_id = %created.id, %date, floors, "Expo created");
                Ok(created)
            }
            Err(e) if e.is_duplicate() => Err(self.slot_taken(date, floors, None).await),
            Err(e) => Err(e),
        }
    }

    async fn get_expo(&self, id: Uuid) -> AppResult<Expo> {
        self.expos.find_by_id(id).await?.ok_or_not_found("Expo")
    }

    async fn list_expos(&self, status: Option<ExpoStatus>) -> AppResult<Vec<Expo>> {
        self.expos.list(status).await
    }

    async fn update_expo(&self, id: Uuid, changes: ExpoChanges) -> AppResult<Expo> {
        let current = self.get_expo(id).await?;

        if let Some(floors) = changes.floors {
            self.floors.validate_floor_count(floors)?;
        }

        let moved_to = changes.placement_after(&current);
        if let Some((date, floors)) = moved_to {
            self.check_placement(date, floors, Some(id))
                .await?
                .into_result()?;
            if floors < current.floors {
                self.ensure_booths_fit(id, floors).await?;
            }
        }

        match self.expos.update(id, changes).await {
            Ok(updated) => {
                info!(expo_id = %id, "Expo updated");
                Ok(updated)
            }
            Err(e) if e.is_duplicate() => {
                let (date, floors) = moved_to.unwrap_or((current.date, current.floors));
                Err(self.slot_taken(date, floors, Some(id)).await)
            }
            Err(e) => Err(e),
        }
    }

    async fn set_expo_status(&self, id: Uuid, status: ExpoStatus) -> AppResult<Expo> {
        let changes = ExpoChanges {
            status: Some(status),
            ..Default::default()
        };
        let updated = self.expos.update(id, changes).await?;
        info!(expo_id = %id, %status, "Expo status changed");
        Ok(updated)
    }

    async fn delete_expo(&self, id: Uuid) -> AppResult<()> {
        self.expos.delete(id).await?;
        info!(expo_id = %id, "Expo deleted");
        Ok(())
    }
}
