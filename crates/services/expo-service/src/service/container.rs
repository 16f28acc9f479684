//! Service Container - Centralized service access.

use std::sync::Arc;

use domain::FloorUniverse;
use sea_orm::DatabaseConnection;

use super::{
    AttendeeManager, AttendeeService, BoothManager, BoothService, ExhibitorManager,
    ExhibitorService, ExpoManager, ExpoService, ScheduleManager, ScheduleService, UserManager,
    UserService,
};
use crate::repository::{
    AttendeeStore, BoothStore, ExhibitorStore, ExpoStore, ScheduleStore, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn expos(&self) -> Arc<dyn ExpoService>;

    fn booths(&self) -> Arc<dyn BoothService>;

    fn exhibitors(&self) -> Arc<dyn ExhibitorService>;

    fn attendees(&self) -> Arc<dyn AttendeeService>;

    fn schedules(&self) -> Arc<dyn ScheduleService>;

    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    expo_service: Arc<dyn ExpoService>,
    booth_service: Arc<dyn BoothService>,
    exhibitor_service: Arc<dyn ExhibitorService>,
    attendee_service: Arc<dyn AttendeeService>,
    schedule_service: Arc<dyn ScheduleService>,
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Wire every service to SeaORM stores sharing one connection pool
    pub fn from_connection(db: DatabaseConnection, floors: FloorUniverse) -> Self {
        let expos = Arc::new(ExpoStore::new(db.clone()));
        let booths = Arc::new(BoothStore::new(db.clone()));
        let exhibitors = Arc::new(ExhibitorStore::new(db.clone()));
        let attendees = Arc::new(AttendeeStore::new(db.clone()));
        let schedules = Arc::new(ScheduleStore::new(db.clone()));
        let users = Arc::new(UserStore::new(db));

        Self {
            expo_service: Arc::new(ExpoManager::new(expos.clone(), booths.clone(), floors)),
            booth_service: Arc::new(BoothManager::new(booths.clone(), expos.clone())),
            exhibitor_service: Arc::new(ExhibitorManager::new(
                exhibitors,
                expos.clone(),
                booths,
            )),
            attendee_service: Arc::new(AttendeeManager::new(attendees, expos.clone())),
            schedule_service: Arc::new(ScheduleManager::new(schedules, expos)),
            user_service: Arc::new(UserManager::new(users)),
        }
    }
}

impl ServiceContainer for Services {
    fn expos(&self) -> Arc<dyn ExpoService> {
        self.expo_service.clone()
    }

    fn booths(&self) -> Arc<dyn BoothService> {
        self.booth_service.clone()
    }

    fn exhibitors(&self) -> Arc<dyn ExhibitorService> {
        self.exhibitor_service.clone()
    }

    fn attendees(&self) -> Arc<dyn AttendeeService> {
        self.attendee_service.clone()
    }

    fn schedules(&self) -> Arc<dyn ScheduleService> {
        self.schedule_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}
