//! Exhibitor repository, including the transactional approval write.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use super::entities::booth::{self, Entity as BoothEntity};
use super::entities::exhibitor::{self, ActiveModel, Entity as ExhibitorEntity};
use super::{finish, into_domain};
use common::{AppError, AppResult, OptionExt};
use domain::{Exhibitor, ExhibitorChanges, ExhibitorStatus, NewExhibitor};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Exhibitor repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ExhibitorRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Exhibitor>>;

    /// List exhibitors, optionally scoped to an expo and a status
    async fn list(
        &self,
        expo_id: Option<Uuid>,
        status: Option<ExhibitorStatus>,
    ) -> AppResult<Vec<Exhibitor>>;

    /// Create a pending application
    async fn create(&self, exhibitor: NewExhibitor) -> AppResult<Exhibitor>;

    async fn update(&self, id: Uuid, changes: ExhibitorChanges) -> AppResult<Exhibitor>;

    async fn approve(&self, id: Uuid) -> AppResult<Exhibitor>;

    /// Reject a pending exhibitor. Booths are not touched.
    async fn reject(&self, id: Uuid) -> AppResult<Exhibitor>;

    /// Delete an exhibitor and release any booth assigned to it
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM implementation of ExhibitorRepository
pub struct ExhibitorStore {
    db: DatabaseConnection,
}

impl ExhibitorStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Move `id` from pending to `target`. Zero affected rows means the
/// exhibitor is missing or was decided concurrently.
async fn decide<C: ConnectionTrait>(db: &C, id: Uuid, target: ExhibitorStatus) -> AppResult<()> {
    let result = ExhibitorEntity::update_many()
        .col_expr(exhibitor::Column::Status, Expr::value(target.as_str()))
        .col_expr(exhibitor::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(exhibitor::Column::Id.eq(id))
        .filter(exhibitor::Column::Status.eq(ExhibitorStatus::Pending.as_str()))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        ExhibitorEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_not_found("Exhibitor")?;
        return Err(AppError::conflict("Exhibitor is no longer pending"));
    }

    Ok(())
}

/// Point `booth_id` at `exhibitor_id` unless another exhibitor holds it or
/// the booth has left the exhibitor's expo
async fn assign_booth<C: ConnectionTrait>(
    db: &C,
    booth_id: Uuid,
    exhibitor: &Exhibitor,
) -> AppResult<()> {
    let result = BoothEntity::update_many()
        .col_expr(booth::Column::AssignedTo, Expr::value(exhibitor.id))
        .col_expr(booth::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(booth::Column::Id.eq(booth_id))
        .filter(booth::Column::ExpoId.eq(exhibitor.expo_id))
        .filter(
            Condition::any()
                .add(booth::Column::AssignedTo.is_null())
                .add(booth::Column::AssignedTo.eq(exhibitor.id)),
        )
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        let booth = BoothEntity::find_by_id(booth_id)
            .one(db)
            .await?
            .ok_or_not_found("Booth")?;
        if booth.expo_id != exhibitor.expo_id {
            return Err(AppError::conflict(format!(
                "Booth {} no longer belongs to this expo",
                booth.booth_number
            )));
        }
        return Err(AppError::conflict(format!(
            "Booth {} is already assigned to another exhibitor",
            booth.booth_number
        )));
    }

    Ok(())
}

async fn load<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<Exhibitor> {
    let model = ExhibitorEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_not_found("Exhibitor")?;
    into_domain(model)
}

async fn approve_in<C: ConnectionTrait>(txn: &C, id: Uuid) -> AppResult<Exhibitor> {
    let current = load(txn, id).await?;

    decide(txn, id, ExhibitorStatus::Approved).await?;
    if let Some(booth_id) = current.booth_selection {
        assign_booth(txn, booth_id, &current).await?;
    }

    load(txn, id).await
}

async fn delete_in<C: ConnectionTrait>(txn: &C, id: Uuid) -> AppResult<()> {
    BoothEntity::update_many()
        .col_expr(booth::Column::AssignedTo, Expr::value(Option::<Uuid>::None))
        .col_expr(booth::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(booth::Column::AssignedTo.eq(id))
        .exec(txn)
        .await?;

    let result = ExhibitorEntity::delete_by_id(id).exec(txn).await?;
    if result.rows_affected == 0 {
        return Err(AppError::not_found("Exhibitor"));
    }

    Ok(())
}

#[async_trait]
impl ExhibitorRepository for ExhibitorStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Exhibitor>> {
        ExhibitorEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(into_domain)
            .transpose()
    }

    async fn list(
        &self,
        expo_id: Option<Uuid>,
        status: Option<ExhibitorStatus>,
    ) -> AppResult<Vec<Exhibitor>> {
        let mut query = ExhibitorEntity::find();
        if let Some(expo_id) = expo_id {
            query = query.filter(exhibitor::Column::ExpoId.eq(expo_id));
        }
        if let Some(status) = status {
            query = query.filter(exhibitor::Column::Status.eq(status.as_str()));
        }

        query
            .order_by_asc(exhibitor::Column::CreatedAt)
            .all(&self.db)
            .await?
            .into_iter()
            .map(into_domain)
            .collect()
    }

    async fn create(&self, exhibitor: NewExhibitor) -> AppResult<Exhibitor> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            expo_id: Set(exhibitor.expo_id),
            user_id: Set(exhibitor.user_id),
            company_name: Set(exhibitor.company_name),
            product_description: Set(exhibitor.product_description),
            booth_selection: Set(exhibitor.booth_selection),
            status: Set(ExhibitorStatus::Pending.as_str().to_string()),
            contact_email: Set(exhibitor.contact_info.email),
            contact_phone: Set(exhibitor.contact_info.phone),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        into_domain(model)
    }

    async fn update(&self, id: Uuid, changes: ExhibitorChanges) -> AppResult<Exhibitor> {
        let model = ExhibitorEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found("Exhibitor")?;

        let mut active: ActiveModel = model.into();
        if let Some(company_name) = changes.company_name {
            active.company_name = Set(company_name);
        }
        if let Some(description) = changes.product_description {
            active.product_description = Set(description);
        }
        if let Some(booth_id) = changes.booth_selection {
            active.booth_selection = Set(booth_id);
        }
        if let Some(contact) = changes.contact_info {
            active.contact_email = Set(contact.email);
            active.contact_phone = Set(contact.phone);
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        into_domain(model)
    }

    async fn approve(&self, id: Uuid) -> AppResult<Exhibitor> {
        let txn = self.db.begin().await?;
        let result = approve_in(&txn, id).await;
        finish(txn, result).await
    }

    async fn reject(&self, id: Uuid) -> AppResult<Exhibitor> {
        decide(&self.db, id, ExhibitorStatus::Rejected).await?;
        load(&self.db, id).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let txn = self.db.begin().await?;
        let result = delete_in(&txn, id).await;
        finish(txn, result).await
    }
}
