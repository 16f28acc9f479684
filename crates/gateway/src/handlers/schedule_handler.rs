//! Session schedule handlers.

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::{NewSchedule, Schedule, ScheduleChanges, TimeSlot};

use crate::extractors::ValidatedJson;
use crate::middleware::{require_admin, CurrentUser};
use crate::state::AppState;

/// Session creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateScheduleRequest {
    pub expo_id: Uuid,
    #[validate(length(min = 1, message = "Session name is required"))]
    #[schema(example = "Opening keynote")]
    pub session_name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub speaker: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
}

/// Session update request; omitted fields stay unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateScheduleRequest {
    #[validate(length(min = 1, message = "Session name cannot be empty"))]
    pub session_name: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub speaker: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl From<UpdateScheduleRequest> for ScheduleChanges {
    fn from(req: UpdateScheduleRequest) -> Self {
        Self {
            session_name: req.session_name,
            start: req.start,
            end: req.end,
            speaker: req.speaker,
            location: req.location,
            description: req.description,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListSchedulesQuery {
    pub expo_id: Uuid,
}

/// Create schedule routes
pub fn schedule_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_schedules).post(create_schedule))
        .route(
            "/:id",
            get(get_schedule).put(update_schedule).delete(delete_schedule),
        )
}

/// List sessions of an expo ordered by start time
#[utoipa::path(
    get,
    path = "/schedules",
    tag = "Schedules",
    security(("bearer_auth" = [])),
    params(ListSchedulesQuery),
    responses(
        (status = 200, description = "Sessions", body = Vec<Schedule>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_schedules(
    State(state): State<AppState>,
    Query(query): Query<ListSchedulesQuery>,
) -> AppResult<Json<Vec<Schedule>>> {
    let schedules = state.services.schedules().list_schedules(query.expo_id).await?;
    Ok(Json(schedules))
}

/// Add a session to an expo (admin only)
#[utoipa::path(
    post,
    path = "/schedules",
    tag = "Schedules",
    security(("bearer_auth" = [])),
    request_body = CreateScheduleRequest,
    responses(
        (status = 201, description = "Session created", body = Schedule),
        (status = 400, description = "Validation error or start not before end"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Expo not found")
    )
)]
pub async fn create_schedule(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateScheduleRequest>,
) -> AppResult<(StatusCode, Json<Schedule>)> {
    require_admin(&current_user)?;

    let schedule = NewSchedule {
        expo_id: payload.expo_id,
        session_name: payload.session_name.trim().to_string(),
        time_slot: TimeSlot::new(payload.start, payload.end)?,
        speaker: payload.speaker,
        location: payload.location,
        description: payload.description,
    };
    let schedule = state.services.schedules().create_schedule(schedule).await?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

/// Get session by ID
#[utoipa::path(
    get,
    path = "/schedules/{id}",
    tag = "Schedules",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Session", body = Schedule),
        (status = 404, description = "Schedule not found")
    )
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Schedule>> {
    let schedule = state.services.schedules().get_schedule(id).await?;
    Ok(Json(schedule))
}

/// Update a session (admin only)
#[utoipa::path(
    put,
    path = "/schedules/{id}",
    tag = "Schedules",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Schedule ID")),
    request_body = UpdateScheduleRequest,
    responses(
        (status = 200, description = "Updated session", body = Schedule),
        (status = 400, description = "Start not before end"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Schedule not found")
    )
)]
pub async fn update_schedule(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateScheduleRequest>,
) -> AppResult<Json<Schedule>> {
    require_admin(&current_user)?;
    let schedule = state
        .services
        .schedules()
        .update_schedule(id, payload.into())
        .await?;
    Ok(Json(schedule))
}

/// Delete a session (admin only)
#[utoipa::path(
    delete,
    path = "/schedules/{id}",
    tag = "Schedules",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Schedule ID")),
    responses(
        (status = 204, description = "Session deleted"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Schedule not found")
    )
)]
pub async fn delete_schedule(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_admin(&current_user)?;
    state.services.schedules().delete_schedule(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
