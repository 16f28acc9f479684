//! HTTP request handlers.

use serde::{Deserialize, Deserializer};

pub mod attendee_handler;
pub mod booth_handler;
pub mod exhibitor_handler;
pub mod expo_handler;
pub mod health_handler;
pub mod schedule_handler;
pub mod user_handler;

pub use attendee_handler::attendee_routes;
pub use booth_handler::booth_routes;
pub use exhibitor_handler::exhibitor_routes;
pub use expo_handler::expo_routes;
pub use health_handler::health_routes;
pub use schedule_handler::schedule_routes;
pub use user_handler::user_routes;

/// Distinguish an explicit `null` from an absent field in update requests.
///
/// Use with `#[serde(default, deserialize_with = "nullable")]`: absent gives
/// `None`, `null` gives `Some(None)`.
pub(crate) fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
