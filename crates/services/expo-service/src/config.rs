//! Expo service configuration.

use std::env;

use common::{DatabaseConfig, VenueConfig};

/// Expo service configuration.
#[derive(Debug, Clone, Default)]
pub struct ExpoServiceConfig {
    pub database: DatabaseConfig,
    pub venue: VenueConfig,
}

impl ExpoServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let database = DatabaseConfig {
            url: env::var("DATABASE_URL").unwrap_or(defaults.database.url),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.database.max_connections),
            min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.database.min_connections),
        };

        let max_floors = match env::var("VENUE_MAX_FLOORS") {
            Ok(raw) => match raw.parse::<u8>() {
                Ok(value) if value > 0 => value,
                _ => {
                    tracing::warn!(
                        "Ignoring invalid VENUE_MAX_FLOORS={:?}, using {}",
                        raw,
                        defaults.venue.max_floors
                    );
                    defaults.venue.max_floors
                }
            },
            Err(_) => defaults.venue.max_floors,
        };

        Self {
            database,
            venue: VenueConfig { max_floors },
        }
    }
}
