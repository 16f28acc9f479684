//! Exhibitor service - Applications and the approval workflow.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{
    Exhibitor, ExhibitorChanges, ExhibitorStatus, NewExhibitor, Transition,
};

use crate::repository::{BoothRepository, ExhibitorRepository, ExpoRepository};

/// Exhibitor service trait for dependency injection.
#[async_trait]
pub trait ExhibitorService: Send + Sync {
    /// Submit a pending application
    async fn apply(&self, application: NewExhibitor) -> AppResult<Exhibitor>;

    async fn get_exhibitor(&self, id: Uuid) -> AppResult<Exhibitor>;

    async fn list_exhibitors(
        &self,
        expo_id: Option<Uuid>,
        status: Option<ExhibitorStatus>,
    ) -> AppResult<Vec<Exhibitor>>;

    /// Edit application details while it is still pending
    async fn update_exhibitor(&self, id: Uuid, changes: ExhibitorChanges) -> AppResult<Exhibitor>;

    /// Approve and assign the selected booth. Approving twice is a no-op.
    async fn approve(&self, id: Uuid) -> AppResult<Exhibitor>;

    /// Reject without touching booths. Rejecting twice is a no-op.
    async fn reject(&self, id: Uuid) -> AppResult<Exhibitor>;

    async fn delete_exhibitor(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ExhibitorService using repositories.
pub struct ExhibitorManager {
    exhibitors: Arc<dyn ExhibitorRepository>,
    expos: Arc<dyn ExpoRepository>,
    booths: Arc<dyn BoothRepository>,
}

impl ExhibitorManager {
    pub fn new(
        exhibitors: Arc<dyn ExhibitorRepository>,
        expos: Arc<dyn ExpoRepository>,
        booths: Arc<dyn BoothRepository>,
    ) -> Self {
        Self {
            exhibitors,
            expos,
            booths,
        }
    }

    /// A selected booth must exist and belong to the exhibitor's expo
    async fn ensure_selectable(&self, expo_id: Uuid, booth_id: Uuid) -> AppResult<()> {
        let booth = self
            .booths
            .find_by_id(booth_id)
            .await?
            .ok_or_not_found("Booth")?;
        if booth.expo_id != expo_id {
            return Err(AppError::validation(
                "Selected booth does not belong to this expo",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ExhibitorService for ExhibitorManager {
    async fn apply(&self, application: NewExhibitor) -> AppResult<Exhibitor> {
        self.expos
            .find_by_id(application.expo_id)
            .await?
            .ok_or_not_found("Expo")?;
        if let Some(booth_id) = application.booth_selection {
            self.ensure_selectable(application.expo_id, booth_id).await?;
        }

        let created = self.exhibitors.create(application).await?;
        info!(exhibitor_id = %created.id, expo_id = %created.expo_id, "Exhibitor applied");
        Ok(created)
    }

    async fn get_exhibitor(&self, id: Uuid) -> AppResult<Exhibitor> {
        self.exhibitors
            .find_by_id(id)
            .await?
            .ok_or_not_found("Exhibitor")
    }

    async fn list_exhibitors(
        &self,
        expo_id: Option<Uuid>,
        status: Option<ExhibitorStatus>,
    ) -> AppResult<Vec<Exhibitor>> {
        self.exhibitors.list(expo_id, status).await
    }

    async fn update_exhibitor(&self, id: Uuid, changes: ExhibitorChanges) -> AppResult<Exhibitor> {
        let current = self.get_exhibitor(id).await?;
        if !current.is_pending() {
            return Err(AppError::conflict(format!(
                "Exhibitor is {} and can no longer be edited",
                current.status
            )));
        }
        if let Some(Some(booth_id)) = changes.booth_selection {
            self.ensure_selectable(current.expo_id, booth_id).await?;
        }

        self.exhibitors.update(id, changes).await
    }

    async fn approve(&self, id: Uuid) -> AppResult<Exhibitor> {
        let current = self.get_exhibitor(id).await?;

        match current.status.transition_to(ExhibitorStatus::Approved)? {
            Transition::Unchanged => Ok(current),
            Transition::Apply => {
                let approved = self.exhibitors.approve(id).await?;
                info!(
                    exhibitor_id = %id,
                    booth_id = ?approved.booth_selection,
                    "Exhibitor approved"
                );
                Ok(approved)
            }
        }
    }

    async fn reject(&self, id: Uuid) -> AppResult<Exhibitor> {
        let current = self.get_exhibitor(id).await?;

        match current.status.transition_to(ExhibitorStatus::Rejected)? {
            Transition::Unchanged => Ok(current),
            Transition::Apply => {
                let rejected = self.exhibitors.reject(id).await?;
                info!(exhibitor_id = %id, "Exhibitor rejected");
                Ok(rejected)
            }
        }
    }

    async fn delete_exhibitor(&self, id: Uuid) -> AppResult<()> {
        self.exhibitors.delete(id).await?;
        info!(exhibitor_id = %id, "Exhibitor deleted");
        Ok(())
    }
}
