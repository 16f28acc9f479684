//! Expo repository.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use super::booth_repository::highest_booth_floor;
use super::entities::expo::{self, ActiveModel, Entity as ExpoEntity};
use super::{finish, into_domain};
use common::{AppError, AppResult, OptionExt};
use domain::booth::booths_above_floor;
use domain::{Expo, ExpoChanges, ExpoStatus, NewExpo};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Expo repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ExpoRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Expo>>;

    /// Find the expo holding the exact (date, floors) slot, ignoring `exclude`
    async fn find_by_slot(
        &self,
        date: NaiveDate,
        floors: i32,
        exclude: Option<Uuid>,
    ) -> AppResult<Option<Expo>>;

    /// Floor counts claimed by expos on `date`
    async fn floors_on(&self, date: NaiveDate) -> AppResult<Vec<i32>>;

    /// List expos ordered by date, optionally filtered by status
    async fn list(&self, status: Option<ExpoStatus>) -> AppResult<Vec<Expo>>;

    async fn create(&self, expo: NewExpo) -> AppResult<Expo>;

    /// Apply changes under the expo's row lock. Shrinking below a floor
    /// that has booths is a conflict.
    async fn update(&self, id: Uuid, changes: ExpoChanges) -> AppResult<Expo>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM implementation of ExpoRepository
pub struct ExpoStore {
    db: DatabaseConnection,
}

impl ExpoStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

async fn update_in<C: ConnectionTrait>(txn: &C, id: Uuid, changes: ExpoChanges) -> AppResult<Expo> {
    let model = ExpoEntity::find_by_id(id)
        .lock_exclusive()
        .one(txn)
        .await?
        .ok_or_not_found("Expo")?;

    // Booth writes lock the same row, so this read sees every committed booth
    if let Some(floors) = changes.floors.filter(|floors| *floors < model.floors) {
        if let Some(highest) = highest_booth_floor(txn, id).await? {
            if highest > floors {
                return Err(booths_above_floor(floors, highest).into());
            }
        }
    }

    let mut active: ActiveModel = model.into();
    if let Some(title) = changes.title {
        active.title = Set(title);
    }
    if let Some(date) = changes.date {
        active.date = Set(date);
    }
    if let Some(location) = changes.location {
        active.location = Set(location);
    }
    if let Some(description) = changes.description {
        active.description = Set(description);
    }
    if let Some(theme) = changes.theme {
        active.theme = Set(theme);
    }
    if let Some(status) = changes.status {
        active.status = Set(status.as_str().to_string());
    }
    if let Some(floors) = changes.floors {
        active.floors = Set(floors);
    }
    if let Some(image) = changes.image {
        active.image = Set(Some(image));
    }
    active.updated_at = Set(Utc::now());

    let model = active.update(txn).await.map_err(AppError::from)?;
    into_domain(model)
}

#[async_trait]
impl ExpoRepository for ExpoStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Expo>> {
        ExpoEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(into_domain)
            .transpose()
    }

    async fn find_by_slot(
        &self,
        date: NaiveDate,
        floors: i32,
        exclude: Option<Uuid>,
    ) -> AppResult<Option<Expo>> {
        let mut query = ExpoEntity::find()
            .filter(expo::Column::Date.eq(date))
            .filter(expo::Column::Floors.eq(floors));
        if let Some(id) = exclude {
            query = query.filter(expo::Column::Id.ne(id));
        }

        query.one(&self.db).await?.map(into_domain).transpose()
    }

    async fn floors_on(&self, date: NaiveDate) -> AppResult<Vec<i32>> {
        let floors = ExpoEntity::find()
            .select_only()
            .column(expo::Column::Floors)
            .filter(expo::Column::Date.eq(date))
            .into_tuple::<i32>()
            .all(&self.db)
            .await?;

        Ok(floors)
    }

    async fn list(&self, status: Option<ExpoStatus>) -> AppResult<Vec<Expo>> {
        let mut query = ExpoEntity::find();
        if let Some(status) = status {
            query = query.filter(expo::Column::Status.eq(status.as_str()));
        }

        query
            .order_by_asc(expo::Column::Date)
            .order_by_asc(expo::Column::Floors)
            .all(&self.db)
            .await?
            .into_iter()
            .map(into_domain)
            .collect()
    }

    async fn create(&self, expo: NewExpo) -> AppResult<Expo> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(expo.title),
            date: Set(expo.date),
            location: Set(expo.location),
            description: Set(expo.description),
            theme: Set(expo.theme),
            status: Set(ExpoStatus::default().as_str().to_string()),
            floors: Set(expo.floors),
            image: Set(expo.image),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        into_domain(model)
    }

    async fn update(&self, id: Uuid, changes: ExpoChanges) -> AppResult<Expo> {
        let txn = self.db.begin().await?;
        let result = update_in(&txn, id, changes).await;
        finish(txn, result).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ExpoEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Expo"));
        }

        Ok(())
    }
}
