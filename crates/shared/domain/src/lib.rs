//! Domain layer - Core expo entities, value objects and business rules.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The floor, booth and approval rules here are shared by the expo service
//! and the HTTP gateway.

pub mod attendee;
pub mod booth;
pub mod constants;
pub mod error;
pub mod exhibitor;
pub mod expo;
pub mod floors;
pub mod password;
pub mod schedule;
pub mod user;

pub use attendee::{generate_badge_id, normalize_email, Attendee, AttendeeStatus, NewAttendee};
pub use booth::{Booth, BoothChanges, BoothStatus, NewBooth, SizeUnit};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use exhibitor::{ContactInfo, Exhibitor, ExhibitorChanges, ExhibitorStatus, NewExhibitor, Transition};
pub use expo::{Expo, ExpoChanges, ExpoStatus, ExpoSummary, NewExpo, PlacementCheck};
pub use floors::{FloorAvailability, FloorUniverse};
pub use password::Password;
pub use schedule::{NewSchedule, Schedule, ScheduleChanges, TimeSlot};
pub use user::{CreateUser, User, UserResponse, UserRole};
