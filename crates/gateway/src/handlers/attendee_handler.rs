//! Attendee registration handlers.

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::{Attendee, AttendeeStatus, NewAttendee};

use crate::extractors::ValidatedJson;
use crate::middleware::{require_admin, CurrentUser};
use crate::state::AppState;

/// Attendee registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterAttendeeRequest {
    pub expo_id: Uuid,
    #[validate(length(min = 1, message = "Full name is required"))]
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub organization: String,
    pub attachment: Option<String>,
}

impl From<RegisterAttendeeRequest> for NewAttendee {
    fn from(req: RegisterAttendeeRequest) -> Self {
        Self {
            expo_id: req.expo_id,
            full_name: req.full_name.trim().to_string(),
            email: req.email,
            phone: req.phone,
            organization: req.organization,
            attachment: req.attachment,
        }
    }
}

/// Attendee status change request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AttendeeStatusRequest {
    pub status: AttendeeStatus,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListAttendeesQuery {
    pub expo_id: Uuid,
}

/// Create attendee routes
pub fn attendee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_attendees).post(register_attendee))
        .route("/badge/:badge_id", get(find_by_badge))
        .route("/:id", get(get_attendee).delete(delete_attendee))
        .route("/:id/status", put(set_attendee_status))
}

/// Register for an expo and receive a badge
#[utoipa::path(
    post,
    path = "/attendees",
    tag = "Attendees",
    security(("bearer_auth" = [])),
    request_body = RegisterAttendeeRequest,
    responses(
        (status = 201, description = "Registration with badge id", body = Attendee),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Expo not found"),
        (status = 409, description = "Email already registered for this expo")
    )
)]
pub async fn register_attendee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterAttendeeRequest>,
) -> AppResult<(StatusCode, Json<Attendee>)> {
    let attendee = state.services.attendees().register(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(attendee)))
}

/// List attendees of an expo (admin only)
#[utoipa::path(
    get,
    path = "/attendees",
    tag = "Attendees",
    security(("bearer_auth" = [])),
    params(ListAttendeesQuery),
    responses(
        (status = 200, description = "Attendees by registration date", body = Vec<Attendee>),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_attendees(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Query(query): Query<ListAttendeesQuery>,
) -> AppResult<Json<Vec<Attendee>>> {
    require_admin(&current_user)?;
    let attendees = state.services.attendees().list_attendees(query.expo_id).await?;
    Ok(Json(attendees))
}

/// Look up a registration by badge id
#[utoipa::path(
    get,
    path = "/attendees/badge/{badge_id}",
    tag = "Attendees",
    security(("bearer_auth" = [])),
    params(("badge_id" = String, Path, description = "Badge ID")),
    responses(
        (status = 200, description = "Registration", body = Attendee),
        (status = 404, description = "Attendee not found")
    )
)]
pub async fn find_by_badge(
    State(state): State<AppState>,
    Path(badge_id): Path<String>,
) -> AppResult<Json<Attendee>> {
    let attendee = state.services.attendees().find_by_badge(&badge_id).await?;
    Ok(Json(attendee))
}

/// Get registration by ID
#[utoipa::path(
    get,
    path = "/attendees/{id}",
    tag = "Attendees",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Attendee ID")),
    responses(
        (status = 200, description = "Registration", body = Attendee),
        (status = 404, description = "Attendee not found")
    )
)]
pub async fn get_attendee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Attendee>> {
    let attendee = state.services.attendees().get_attendee(id).await?;
    Ok(Json(attendee))
}

/// Check in or cancel a registration (admin only)
#[utoipa::path(
    put,
    path = "/attendees/{id}/status",
    tag = "Attendees",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Attendee ID")),
    request_body = AttendeeStatusRequest,
    responses(
        (status = 200, description = "Updated registration", body = Attendee),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Attendee not found")
    )
)]
pub async fn set_attendee_status(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AttendeeStatusRequest>,
) -> AppResult<Json<Attendee>> {
    require_admin(&current_user)?;
    let attendee = state
        .services
        .attendees()
        .set_attendee_status(id, payload.status)
        .await?;
    Ok(Json(attendee))
}

/// Delete a registration (admin only)
#[utoipa::path(
    delete,
    path = "/attendees/{id}",
    tag = "Attendees",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Attendee ID")),
    responses(
        (status = 204, description = "Registration deleted"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Attendee not found")
    )
)]
pub async fn delete_attendee(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_admin(&current_user)?;
    state.services.attendees().delete_attendee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
