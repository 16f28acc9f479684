//! Application services layer - Use cases and business logic.
//!
//! Services run the cross-entity rules (expo slot guard, booth placement,
//! approval workflow) on top of the repository traits.

mod attendee_service;
mod booth_service;
pub mod container;
mod exhibitor_service;
mod expo_service;
mod schedule_service;
mod user_service;

pub use attendee_service::{AttendeeManager, AttendeeService};
pub use booth_service::{BoothManager, BoothService};
pub use container::{ServiceContainer, Services};
pub use exhibitor_service::{ExhibitorManager, ExhibitorService};
pub use expo_service::{ExpoManager, ExpoService};
pub use schedule_service::{ScheduleManager, ScheduleService};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
