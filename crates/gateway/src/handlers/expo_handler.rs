//! Expo handlers.

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::{Expo, ExpoChanges, ExpoStatus, ExpoSummary, FloorAvailability, NewExpo, PlacementCheck};

use crate::extractors::ValidatedJson;
use crate::middleware::{require_admin, CurrentUser};
use crate::state::AppState;

/// Expo creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateExpoRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Spring Tech Fair")]
    pub title: String,
    #[schema(example = "2025-06-01")]
    pub date: NaiveDate,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub theme: String,
    /// Number of venue floors booked for the date
    #[validate(range(min = 1, message = "Floors must be at least 1"))]
    #[schema(example = 2)]
    pub floors: i32,
    pub image: Option<String>,
}

impl From<CreateExpoRequest> for NewExpo {
    fn from(req: CreateExpoRequest) -> Self {
        Self {
            title: req.title.trim().to_string(),
            date: req.date,
            location: req.location,
            description: req.description,
            theme: req.theme,
            floors: req.floors,
            image: req.image,
        }
    }
}

/// Expo update request; omitted fields stay unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateExpoRequest {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "Location cannot be empty"))]
    pub location: Option<String>,
    pub description: Option<String>,
    pub theme: Option<String>,
    pub status: Option<ExpoStatus>,
    #[validate(range(min = 1, message = "Floors must be at least 1"))]
    pub floors: Option<i32>,
    pub image: Option<String>,
}

impl From<UpdateExpoRequest> for ExpoChanges {
    fn from(req: UpdateExpoRequest) -> Self {
        Self {
            title: req.title,
            date: req.date,
            location: req.location,
            description: req.description,
            theme: req.theme,
            status: req.status,
            floors: req.floors,
            image: req.image,
        }
    }
}

/// Expo status change request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ExpoStatusRequest {
    pub status: ExpoStatus,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListExposQuery {
    /// Only expos in this status
    pub status: Option<ExpoStatus>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FloorsQuery {
    #[param(example = "2025-06-01")]
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlacementQuery {
    #[param(example = "2025-06-01")]
    pub date: NaiveDate,
    pub floors: i32,
    /// Expo to ignore, typically the one being edited
    pub exclude: Option<Uuid>,
}

/// Result of a placement check
#[derive(Debug, Serialize, ToSchema)]
pub struct PlacementResponse {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_expo: Option<ExpoSummary>,
}

impl From<PlacementCheck> for PlacementResponse {
    fn from(check: PlacementCheck) -> Self {
        match check {
            PlacementCheck::Ok => Self {
                available: true,
                existing_expo: None,
            },
            PlacementCheck::Conflict(existing) => Self {
                available: false,
                existing_expo: Some(existing),
            },
        }
    }
}

/// Create expo routes
pub fn expo_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_expos).post(create_expo))
        .route("/floors", get(available_floors))
        .route("/placement", get(check_placement))
        .route("/:id", get(get_expo).put(update_expo).delete(delete_expo))
        .route("/:id/status", put(set_expo_status))
}

/// List expos ordered by date
#[utoipa::path(
    get,
    path = "/expos",
    tag = "Expos",
    security(("bearer_auth" = [])),
    params(ListExposQuery),
    responses(
        (status = 200, description = "Expos ordered by date", body = Vec<Expo>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_expos(
    State(state): State<AppState>,
    Query(query): Query<ListExposQuery>,
) -> AppResult<Json<Vec<Expo>>> {
    let expos = state.services.expos().list_expos(query.status).await?;
    Ok(Json(expos))
}

/// Create an expo (admin only)
#[utoipa::path(
    post,
    path = "/expos",
    tag = "Expos",
    security(("bearer_auth" = [])),
    request_body = CreateExpoRequest,
    responses(
        (status = 201, description = "Expo created", body = Expo),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 409, description = "Another expo holds the same date and floor count")
    )
)]
pub async fn create_expo(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateExpoRequest>,
) -> AppResult<(StatusCode, Json<Expo>)> {
    require_admin(&current_user)?;
    let expo = state.services.expos().create_expo(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(expo)))
}

/// Floor counts still free on a date
#[utoipa::path(
    get,
    path = "/expos/floors",
    tag = "Expos",
    security(("bearer_auth" = [])),
    params(FloorsQuery),
    responses(
        (status = 200, description = "Available and occupied floor counts", body = FloorAvailability),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn available_floors(
    State(state): State<AppState>,
    Query(query): Query<FloorsQuery>,
) -> AppResult<Json<FloorAvailability>> {
    let availability = state.services.expos().available_floors(query.date).await?;
    Ok(Json(availability))
}

/// Whether an expo could be placed on (date, floors)
#[utoipa::path(
    get,
    path = "/expos/placement",
    tag = "Expos",
    security(("bearer_auth" = [])),
    params(PlacementQuery),
    responses(
        (status = 200, description = "Placement check result", body = PlacementResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn check_placement(
    State(state): State<AppState>,
    Query(query): Query<PlacementQuery>,
) -> AppResult<Json<PlacementResponse>> {
    let check = state
        .services
        .expos()
        .check_placement(query.date, query.floors, query.exclude)
        .await?;
    Ok(Json(check.into()))
}

/// Get expo by ID
#[utoipa::path(
    get,
    path = "/expos/{id}",
    tag = "Expos",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Expo ID")),
    responses(
        (status = 200, description = "Expo", body = Expo),
        (status = 404, description = "Expo not found")
    )
)]
pub async fn get_expo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Expo>> {
    let expo = state.services.expos().get_expo(id).await?;
    Ok(Json(expo))
}

/// Update an expo (admin only)
#[utoipa::path(
    put,
    path = "/expos/{id}",
    tag = "Expos",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Expo ID")),
    request_body = UpdateExpoRequest,
    responses(
        (status = 200, description = "Updated expo", body = Expo),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Expo not found"),
        (status = 409, description = "Slot taken or booths above the new floor count")
    )
)]
pub async fn update_expo(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateExpoRequest>,
) -> AppResult<Json<Expo>> {
    require_admin(&current_user)?;
    let expo = state.services.expos().update_expo(id, payload.into()).await?;
    Ok(Json(expo))
}

/// Change expo status (admin only)
#[utoipa::path(
    put,
    path = "/expos/{id}/status",
    tag = "Expos",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Expo ID")),
    request_body = ExpoStatusRequest,
    responses(
        (status = 200, description = "Updated expo", body = Expo),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Expo not found")
    )
)]
pub async fn set_expo_status(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ExpoStatusRequest>,
) -> AppResult<Json<Expo>> {
    require_admin(&current_user)?;
    let expo = state.services.expos().set_expo_status(id, payload.status).await?;
    Ok(Json(expo))
}

/// Delete an expo and everything attached to it (admin only)
#[utoipa::path(
    delete,
    path = "/expos/{id}",
    tag = "Expos",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Expo ID")),
    responses(
        (status = 204, description = "Expo deleted"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Expo not found")
    )
)]
pub async fn delete_expo(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_admin(&current_user)?;
    state.services.expos().delete_expo(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
