//! Gateway configuration.

use std::env;

use common::{DatabaseConfig, JwtConfig, VenueConfig};
use expo_service_lib::config::ExpoServiceConfig;

/// Secret used when `JWT_SECRET` is unset. Only suitable for local development.
const DEV_JWT_SECRET: &str = "dev-secret-change-me";

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Entity store connection
    pub database: DatabaseConfig,
    /// Principal token verification
    pub jwt: JwtConfig,
    /// Bookable floor counts per date
    pub venue: VenueConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let store = ExpoServiceConfig::from_env();

        let secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                if cfg!(debug_assertions) {
                    tracing::warn!("JWT_SECRET is not set, using the development secret");
                }
                DEV_JWT_SECRET.to_string()
            }
        };

        Self {
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GATEWAY_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database: store.database,
            jwt: JwtConfig { secret },
            venue: store.venue,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database: DatabaseConfig::default(),
            jwt: JwtConfig {
                secret: DEV_JWT_SECRET.to_string(),
            },
            venue: VenueConfig::default(),
        }
    }
}
