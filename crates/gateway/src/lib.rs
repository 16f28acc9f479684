//! API Gateway Library
//!
//! HTTP REST API for expo management. Requests are authenticated with bearer
//! JWTs, role-gated, and served by the embedded expo service.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use domain::FloorUniverse;
use expo_service_lib::infra::Database;
use expo_service_lib::Services;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Build application state on top of an already connected store.
pub fn build_state(db: Database, config: GatewayConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    let floors = FloorUniverse::new(config.venue.max_floors)?;
    let services = Arc::new(Services::from_connection(db.get_connection(), floors));
    Ok(AppState::new(services, db, config))
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Connect and apply pending migrations
    let db = Database::connect(&config.database).await?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!(
        max_floors = config.venue.max_floors,
        "Venue floor universe configured"
    );

    let state = build_state(db, config)?;
    let app = create_router(state);

    info!("Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
