//! SeaORM entities for the expo store.

pub mod attendee;
pub mod booth;
pub mod exhibitor;
pub mod expo;
pub mod schedule;
pub mod user;
