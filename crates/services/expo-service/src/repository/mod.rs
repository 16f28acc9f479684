//! Repository layer for data access.
//!
//! Each aggregate has a trait (mockable in tests) and a SeaORM-backed store.
//! Unique indexes in the store are the real guard against double booking;
//! stores surface violations as `AppError::Duplicate` and the service layer
//! translates them.

pub mod entities;
mod attendee_repository;
mod booth_repository;
mod exhibitor_repository;
mod expo_repository;
mod schedule_repository;
mod user_repository;

pub use attendee_repository::{AttendeeRepository, AttendeeStore};
pub use booth_repository::{BoothRepository, BoothStore};
pub use exhibitor_repository::{ExhibitorRepository, ExhibitorStore};
pub use expo_repository::{ExpoRepository, ExpoStore};
pub use schedule_repository::{ScheduleRepository, ScheduleStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use attendee_repository::MockAttendeeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use booth_repository::MockBoothRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use exhibitor_repository::MockExhibitorRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use expo_repository::MockExpoRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use schedule_repository::MockScheduleRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

use common::{AppError, AppResult};
use domain::DomainError;
use sea_orm::DatabaseTransaction;

/// Convert a stored row into its domain type.
///
/// A row that does not parse (unknown status string, etc.) is an internal
/// error, not a client error.
pub(crate) fn into_domain<M, T>(model: M) -> AppResult<T>
where
    T: TryFrom<M, Error = DomainError>,
{
    T::try_from(model).map_err(|e| AppError::internal(format!("Invalid stored row: {}", e)))
}

/// Commit on success, roll back on error.
pub(crate) async fn finish<T>(txn: DatabaseTransaction, result: AppResult<T>) -> AppResult<T> {
    match result {
        Ok(value) => {
            txn.commit().await.map_err(AppError::from)?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Transaction rollback failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}
