//! Booth handlers.

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::{Booth, BoothChanges, BoothStatus, NewBooth, SizeUnit};

use crate::extractors::ValidatedJson;
use crate::middleware::{require_admin, CurrentUser};
use crate::state::AppState;

/// Booth creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBoothRequest {
    pub expo_id: Uuid,
    /// Floor number, bounded by the expo's floor count
    #[validate(range(min = 1, message = "Floor must be at least 1"))]
    #[schema(example = 1)]
    pub floor: i32,
    #[validate(length(min = 1, message = "Booth number cannot be empty"))]
    #[schema(example = "A-12")]
    pub booth_number: String,
    pub length: f64,
    pub width: f64,
    pub size_unit: Option<SizeUnit>,
    pub status: Option<BoothStatus>,
    pub price: Option<Decimal>,
    #[serde(default)]
    pub has_power: bool,
    #[serde(default)]
    pub has_wifi: bool,
    #[serde(default)]
    pub is_corner_booth: bool,
    #[serde(default)]
    pub notes: String,
}

impl From<CreateBoothRequest> for NewBooth {
    fn from(req: CreateBoothRequest) -> Self {
        Self {
            expo_id: req.expo_id,
            floor: req.floor,
            booth_number: req.booth_number,
            length: req.length,
            width: req.width,
            size_unit: req.size_unit.unwrap_or_default(),
            status: req.status.unwrap_or_default(),
            price: req.price,
            has_power: req.has_power,
            has_wifi: req.has_wifi,
            is_corner_booth: req.is_corner_booth,
            notes: req.notes,
        }
    }
}

/// Booth update request; omitted fields stay unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBoothRequest {
    pub expo_id: Option<Uuid>,
    #[validate(range(min = 1, message = "Floor must be at least 1"))]
    pub floor: Option<i32>,
    #[validate(length(min = 1, message = "Booth number cannot be empty"))]
    pub booth_number: Option<String>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub size_unit: Option<SizeUnit>,
    pub status: Option<BoothStatus>,
    /// `null` clears the price
    #[serde(default, deserialize_with = "super::nullable")]
    #[schema(value_type = Option<String>, example = "1500.00")]
    pub price: Option<Option<Decimal>>,
    pub has_power: Option<bool>,
    pub has_wifi: Option<bool>,
    pub is_corner_booth: Option<bool>,
    pub notes: Option<String>,
}

impl From<UpdateBoothRequest> for BoothChanges {
    fn from(req: UpdateBoothRequest) -> Self {
        Self {
            expo_id: req.expo_id,
            floor: req.floor,
            booth_number: req.booth_number,
            length: req.length,
            width: req.width,
            size_unit: req.size_unit,
            status: req.status,
            price: req.price,
            has_power: req.has_power,
            has_wifi: req.has_wifi,
            is_corner_booth: req.is_corner_booth,
            notes: req.notes,
        }
    }
}

/// Booth status change request
#[derive(Debug, Deserialize, ToSchema)]
pub struct BoothStatusRequest {
    pub status: BoothStatus,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListBoothsQuery {
    pub expo_id: Uuid,
    pub floor: Option<i32>,
    pub status: Option<BoothStatus>,
}

/// Create booth routes
pub fn booth_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_booths).post(create_booth))
        .route("/:id", get(get_booth).put(update_booth).delete(delete_booth))
        .route("/:id/status", put(set_booth_status))
}

/// List booths of an expo ordered by floor and number
#[utoipa::path(
    get,
    path = "/booths",
    tag = "Booths",
    security(("bearer_auth" = [])),
    params(ListBoothsQuery),
    responses(
        (status = 200, description = "Booths of the expo", body = Vec<Booth>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_booths(
    State(state): State<AppState>,
    Query(query): Query<ListBoothsQuery>,
) -> AppResult<Json<Vec<Booth>>> {
    let booths = state
        .services
        .booths()
        .list_booths(query.expo_id, query.floor, query.status)
        .await?;
    Ok(Json(booths))
}

/// Create a booth (admin only)
#[utoipa::path(
    post,
    path = "/booths",
    tag = "Booths",
    security(("bearer_auth" = [])),
    request_body = CreateBoothRequest,
    responses(
        (status = 201, description = "Booth created", body = Booth),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Expo not found"),
        (status = 409, description = "Floor not booked by the expo or booth number taken")
    )
)]
pub async fn create_booth(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBoothRequest>,
) -> AppResult<(StatusCode, Json<Booth>)> {
    require_admin(&current_user)?;
    let booth = state.services.booths().create_booth(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(booth)))
}

/// Get booth by ID
#[utoipa::path(
    get,
    path = "/booths/{id}",
    tag = "Booths",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booth ID")),
    responses(
        (status = 200, description = "Booth", body = Booth),
        (status = 404, description = "Booth not found")
    )
)]
pub async fn get_booth(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Booth>> {
    let booth = state.services.booths().get_booth(id).await?;
    Ok(Json(booth))
}

/// Update a booth (admin only)
#[utoipa::path(
    put,
    path = "/booths/{id}",
    tag = "Booths",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booth ID")),
    request_body = UpdateBoothRequest,
    responses(
        (status = 200, description = "Updated booth", body = Booth),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Booth or expo not found"),
        (status = 409, description = "Floor not booked by the expo or booth number taken")
    )
)]
pub async fn update_booth(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateBoothRequest>,
) -> AppResult<Json<Booth>> {
    require_admin(&current_user)?;
    let booth = state.services.booths().update_booth(id, payload.into()).await?;
    Ok(Json(booth))
}

/// Change booth status (admin only)
#[utoipa::path(
    put,
    path = "/booths/{id}/status",
    tag = "Booths",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booth ID")),
    request_body = BoothStatusRequest,
    responses(
        (status = 200, description = "Updated booth", body = Booth),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Booth not found")
    )
)]
pub async fn set_booth_status(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BoothStatusRequest>,
) -> AppResult<Json<Booth>> {
    require_admin(&current_user)?;
    let booth = state
        .services
        .booths()
        .set_booth_status(id, payload.status)
        .await?;
    Ok(Json(booth))
}

/// Delete a booth (admin only)
#[utoipa::path(
    delete,
    path = "/booths/{id}",
    tag = "Booths",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booth ID")),
    responses(
        (status = 204, description = "Booth deleted"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Booth not found")
    )
)]
pub async fn delete_booth(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_admin(&current_user)?;
    state.services.booths().delete_booth(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
