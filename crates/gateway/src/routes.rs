//! Route configuration.

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{
    attendee_routes, booth_routes, exhibitor_routes, expo_routes, health_routes,
    schedule_routes, user_routes,
};
use crate::middleware::auth_middleware;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Everything except health and docs requires a bearer token
    let protected = Router::new()
        .nest("/expos", expo_routes())
        .nest("/booths", booth_routes())
        .nest("/exhibitors", exhibitor_routes())
        .nest("/attendees", attendee_routes())
        .nest("/schedules", schedule_routes())
        .nest("/users", user_routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .nest("/health", health_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
