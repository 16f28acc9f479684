//! Booth repository.
//!
//! Writes that place a booth on a floor lock the expo row first, so they
//! serialize with expo updates that change the floor count.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use super::entities::booth::{self, ActiveModel, Entity as BoothEntity};
use super::entities::exhibitor::{self, Entity as ExhibitorEntity};
use super::entities::expo::Entity as ExpoEntity;
use super::{finish, into_domain};
use common::{AppError, AppResult, OptionExt};
use domain::booth::{booth_claimed, ensure_floor_available};
use domain::{Booth, BoothChanges, BoothStatus, Expo, NewBooth};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Booth repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BoothRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booth>>;

    /// Find the booth holding (expo, floor, booth_number), ignoring `exclude`
    async fn find_by_key(
        &self,
        expo_id: Uuid,
        floor: i32,
        booth_number: &str,
        exclude: Option<Uuid>,
    ) -> AppResult<Option<Booth>>;

    /// List booths of an expo ordered by floor then number
    async fn list(
        &self,
        expo_id: Uuid,
        floor: Option<i32>,
        status: Option<BoothStatus>,
    ) -> AppResult<Vec<Booth>>;

    /// Highest floor any booth of the expo sits on
    async fn highest_floor(&self, expo_id: Uuid) -> AppResult<Option<i32>>;

    /// Insert a booth after checking its floor against the locked expo
    async fn create(&self, booth: NewBooth) -> AppResult<Booth>;

    /// Apply changes. Moving to another expo is refused while the booth is
    /// assigned or selected by an exhibitor.
    async fn update(&self, id: Uuid, changes: BoothChanges) -> AppResult<Booth>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM implementation of BoothRepository
pub struct BoothStore {
    db: DatabaseConnection,
}

impl BoothStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Load an expo holding its row lock until the transaction ends
pub(crate) async fn lock_expo<C: ConnectionTrait>(db: &C, expo_id: Uuid) -> AppResult<Expo> {
    let model = ExpoEntity::find_by_id(expo_id)
        .lock_exclusive()
        .one(db)
        .await?
        .ok_or_not_found("Expo")?;
    into_domain(model)
}

pub(crate) async fn highest_booth_floor<C: ConnectionTrait>(
    db: &C,
    expo_id: Uuid,
) -> AppResult<Option<i32>> {
    let highest = BoothEntity::find()
        .select_only()
        .column_as(booth::Column::Floor.max(), "highest_floor")
        .filter(booth::Column::ExpoId.eq(expo_id))
        .into_tuple::<Option<i32>>()
        .one(db)
        .await?;

    Ok(highest.flatten())
}

async fn is_selected<C: ConnectionTrait>(db: &C, booth_id: Uuid) -> AppResult<bool> {
    let selections = ExhibitorEntity::find()
        .filter(exhibitor::Column::BoothSelection.eq(booth_id))
        .count(db)
        .await?;
    Ok(selections > 0)
}

async fn create_in<C: ConnectionTrait>(txn: &C, booth: NewBooth) -> AppResult<Booth> {
    let expo = lock_expo(txn, booth.expo_id).await?;
    ensure_floor_available(&expo, booth.floor)?;

    let now = Utc::now();
    let active_model = ActiveModel {
        id: Set(Uuid::new_v4()),
        expo_id: Set(booth.expo_id),
        assigned_to: Set(None),
        floor: Set(booth.floor),
        booth_number: Set(booth.booth_number.trim().to_string()),
        length: Set(booth.length),
        width: Set(booth.width),
        size_unit: Set(booth.size_unit.as_str().to_string()),
        status: Set(booth.status.as_str().to_string()),
        price: Set(booth.price),
        has_power: Set(booth.has_power),
        has_wifi: Set(booth.has_wifi),
        is_corner_booth: Set(booth.is_corner_booth),
        notes: Set(booth.notes),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let model = active_model.insert(txn).await.map_err(AppError::from)?;
    into_domain(model)
}

async fn update_in<C: ConnectionTrait>(txn: &C, id: Uuid, changes: BoothChanges) -> AppResult<Booth> {
    let model = BoothEntity::find_by_id(id)
        .lock_exclusive()
        .one(txn)
        .await?
        .ok_or_not_found("Booth")?;
    let current: Booth = into_domain(model.clone())?;

    if changes.relocates(&current) {
        let expo = lock_expo(txn, changes.expo_id.unwrap_or(current.expo_id)).await?;
        ensure_floor_available(&expo, changes.floor.unwrap_or(current.floor))?;
    }
    // Selections and assignments are scoped to the booth's expo
    if changes.changes_expo(&current) && (current.is_assigned() || is_selected(txn, id).await?) {
        return Err(booth_claimed(&current.booth_number).into());
    }

    let mut active: ActiveModel = model.into();
    if let Some(expo_id) = changes.expo_id {
        active.expo_id = Set(expo_id);
    }
    if let Some(floor) = changes.floor {
        active.floor = Set(floor);
    }
    if let Some(number) = changes.booth_number {
        active.booth_number = Set(number.trim().to_string());
    }
    if let Some(length) = changes.length {
        active.length = Set(length);
    }
    if let Some(width) = changes.width {
        active.width = Set(width);
    }
    if let Some(unit) = changes.size_unit {
        active.size_unit = Set(unit.as_str().to_string());
    }
    if let Some(status) = changes.status {
        active.status = Set(status.as_str().to_string());
    }
    if let Some(price) = changes.price {
        active.price = Set(price);
    }
    if let Some(has_power) = changes.has_power {
        active.has_power = Set(has_power);
    }
    if let Some(has_wifi) = changes.has_wifi {
        active.has_wifi = Set(has_wifi);
    }
    if let Some(corner) = changes.is_corner_booth {
        active.is_corner_booth = Set(corner);
    }
    if let Some(notes) = changes.notes {
        active.notes = Set(notes);
    }
    active.updated_at = Set(Utc::now());

    let model = active.update(txn).await.map_err(AppError::from)?;
    into_domain(model)
}

#[async_trait]
impl BoothRepository for BoothStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booth>> {
        BoothEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(into_domain)
            .transpose()
    }

    async fn find_by_key(
        &self,
        expo_id: Uuid,
        floor: i32,
        booth_number: &str,
        exclude: Option<Uuid>,
    ) -> AppResult<Option<Booth>> {
        let mut query = BoothEntity::find()
            .filter(booth::Column::ExpoId.eq(expo_id))
            .filter(booth::Column::Floor.eq(floor))
            .filter(booth::Column::BoothNumber.eq(booth_number));
        if let Some(id) = exclude {
            query = query.filter(booth::Column::Id.ne(id));
        }

        query.one(&self.db).await?.map(into_domain).transpose()
    }

    async fn list(
        &self,
        expo_id: Uuid,
        floor: Option<i32>,
        status: Option<BoothStatus>,
    ) -> AppResult<Vec<Booth>> {
        let mut query = BoothEntity::find().filter(booth::Column::ExpoId.eq(expo_id));
        if let Some(floor) = floor {
            query = query.filter(booth::Column::Floor.eq(floor));
        }
        if let Some(status) = status {
            query = query.filter(booth::Column::Status.eq(status.as_str()));
        }

        query
            .order_by_asc(booth::Column::Floor)
            .order_by_asc(booth::Column::BoothNumber)
            .all(&self.db)
            .await?
            .into_iter()
            .map(into_domain)
            .collect()
    }

    async fn highest_floor(&self, expo_id: Uuid) -> AppResult<Option<i32>> {
        highest_booth_floor(&self.db, expo_id).await
    }

    async fn create(&self, booth: NewBooth) -> AppResult<Booth> {
        let txn = self.db.begin().await?;
        let result = create_in(&txn, booth).await;
        finish(txn, result).await
    }

    async fn update(&self, id: Uuid, changes: BoothChanges) -> AppResult<Booth> {
        let txn = self.db.begin().await?;
        let result = update_in(&txn, id, changes).await;
        finish(txn, result).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = BoothEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Booth"));
        }

        Ok(())
    }
}
