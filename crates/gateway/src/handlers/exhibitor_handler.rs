//! Exhibitor application handlers.

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::{ContactInfo, Exhibitor, ExhibitorChanges, ExhibitorStatus, NewExhibitor, UserRole};

use crate::extractors::ValidatedJson;
use crate::middleware::{require_admin, require_role, CurrentUser};
use crate::state::AppState;

/// Digits with optional leading `+` and common separators
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 ()\-]{5,19}$").expect("phone pattern compiles"));

/// Contact details of the applying company
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ContactRequest {
    #[validate(email(message = "Invalid contact email"))]
    #[schema(example = "sales@acme.example")]
    pub email: String,
    #[validate(regex(path = *PHONE_REGEX, message = "Invalid contact phone"))]
    #[schema(example = "+1 555 0100")]
    pub phone: String,
}

impl From<ContactRequest> for ContactInfo {
    fn from(req: ContactRequest) -> Self {
        Self {
            email: req.email.trim().to_string(),
            phone: req.phone.trim().to_string(),
        }
    }
}

/// Exhibitor application request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ApplyExhibitorRequest {
    pub expo_id: Uuid,
    #[validate(length(min = 1, message = "Company name is required"))]
    #[schema(example = "Acme Robotics")]
    pub company_name: String,
    #[serde(default)]
    pub product_description: String,
    /// Booth of the same expo the company would like to occupy
    pub booth_selection: Option<Uuid>,
    #[validate(nested)]
    pub contact_info: ContactRequest,
}

/// Application edit request; only allowed while pending
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateExhibitorRequest {
    #[validate(length(min = 1, message = "Company name cannot be empty"))]
    pub company_name: Option<String>,
    pub product_description: Option<String>,
    /// `null` withdraws the booth selection
    #[serde(default, deserialize_with = "super::nullable")]
    #[schema(value_type = Option<String>, format = Uuid)]
    pub booth_selection: Option<Option<Uuid>>,
    #[validate(nested)]
    pub contact_info: Option<ContactRequest>,
}

impl From<UpdateExhibitorRequest> for ExhibitorChanges {
    fn from(req: UpdateExhibitorRequest) -> Self {
        Self {
            company_name: req.company_name,
            product_description: req.product_description,
            booth_selection: req.booth_selection,
            contact_info: req.contact_info.map(ContactInfo::from),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListExhibitorsQuery {
    pub expo_id: Option<Uuid>,
    pub status: Option<ExhibitorStatus>,
}

/// Create exhibitor routes
pub fn exhibitor_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_exhibitors).post(apply))
        .route(
            "/:id",
            get(get_exhibitor)
                .put(update_exhibitor)
                .delete(delete_exhibitor),
        )
        .route("/:id/approve", post(approve_exhibitor))
        .route("/:id/reject", post(reject_exhibitor))
}

/// Only admins and the applicant may touch an application
fn ensure_applicant_or_admin(user: &CurrentUser, exhibitor: &Exhibitor) -> AppResult<()> {
    if exhibitor.user_id == Some(user.id) {
        Ok(())
    } else {
        require_admin(user)
    }
}

/// Apply for a booth at an expo (exhibitors and admins)
#[utoipa::path(
    post,
    path = "/exhibitors",
    tag = "Exhibitors",
    security(("bearer_auth" = [])),
    request_body = ApplyExhibitorRequest,
    responses(
        (status = 201, description = "Pending application created", body = Exhibitor),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - Exhibitor role required"),
        (status = 404, description = "Expo or booth not found")
    )
)]
pub async fn apply(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ApplyExhibitorRequest>,
) -> AppResult<(StatusCode, Json<Exhibitor>)> {
    require_role(&current_user, UserRole::Exhibitor)?;

    let application = NewExhibitor {
        expo_id: payload.expo_id,
        user_id: Some(current_user.id),
        company_name: payload.company_name.trim().to_string(),
        product_description: payload.product_description,
        booth_selection: payload.booth_selection,
        contact_info: payload.contact_info.into(),
    };
    let exhibitor = state.services.exhibitors().apply(application).await?;
    Ok((StatusCode::CREATED, Json(exhibitor)))
}

/// List applications
#[utoipa::path(
    get,
    path = "/exhibitors",
    tag = "Exhibitors",
    security(("bearer_auth" = [])),
    params(ListExhibitorsQuery),
    responses(
        (status = 200, description = "Applications", body = Vec<Exhibitor>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_exhibitors(
    State(state): State<AppState>,
    Query(query): Query<ListExhibitorsQuery>,
) -> AppResult<Json<Vec<Exhibitor>>> {
    let exhibitors = state
        .services
        .exhibitors()
        .list_exhibitors(query.expo_id, query.status)
        .await?;
    Ok(Json(exhibitors))
}

/// Get application by ID
#[utoipa::path(
    get,
    path = "/exhibitors/{id}",
    tag = "Exhibitors",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Exhibitor ID")),
    responses(
        (status = 200, description = "Application", body = Exhibitor),
        (status = 404, description = "Exhibitor not found")
    )
)]
pub async fn get_exhibitor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Exhibitor>> {
    let exhibitor = state.services.exhibitors().get_exhibitor(id).await?;
    Ok(Json(exhibitor))
}

/// Edit a pending application (applicant or admin)
#[utoipa::path(
    put,
    path = "/exhibitors/{id}",
    tag = "Exhibitors",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Exhibitor ID")),
    request_body = UpdateExhibitorRequest,
    responses(
        (status = 200, description = "Updated application", body = Exhibitor),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Exhibitor not found"),
        (status = 409, description = "Application already decided")
    )
)]
pub async fn update_exhibitor(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateExhibitorRequest>,
) -> AppResult<Json<Exhibitor>> {
    let exhibitors = state.services.exhibitors();
    let current = exhibitors.get_exhibitor(id).await?;
    ensure_applicant_or_admin(&current_user, &current)?;

    let exhibitor = exhibitors.update_exhibitor(id, payload.into()).await?;
    Ok(Json(exhibitor))
}

/// Approve an application and assign its selected booth (admin only)
#[utoipa::path(
    post,
    path = "/exhibitors/{id}/approve",
    tag = "Exhibitors",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Exhibitor ID")),
    responses(
        (status = 200, description = "Approved application", body = Exhibitor),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Exhibitor not found"),
        (status = 409, description = "Already rejected or booth held by another exhibitor")
    )
)]
pub async fn approve_exhibitor(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Exhibitor>> {
    require_admin(&current_user)?;
    let exhibitor = state.services.exhibitors().approve(id).await?;
    Ok(Json(exhibitor))
}

/// Reject an application (admin only)
#[utoipa::path(
    post,
    path = "/exhibitors/{id}/reject",
    tag = "Exhibitors",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Exhibitor ID")),
    responses(
        (status = 200, description = "Rejected application", body = Exhibitor),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Exhibitor not found"),
        (status = 409, description = "Already approved")
    )
)]
pub async fn reject_exhibitor(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Exhibitor>> {
    require_admin(&current_user)?;
    let exhibitor = state.services.exhibitors().reject(id).await?;
    Ok(Json(exhibitor))
}

/// Withdraw or remove an application (applicant or admin)
#[utoipa::path(
    delete,
    path = "/exhibitors/{id}",
    tag = "Exhibitors",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Exhibitor ID")),
    responses(
        (status = 204, description = "Application deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Exhibitor not found")
    )
)]
pub async fn delete_exhibitor(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let exhibitors = state.services.exhibitors();
    let current = exhibitors.get_exhibitor(id).await?;
    ensure_applicant_or_admin(&current_user, &current)?;

    exhibitors.delete_exhibitor(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_pattern() {
        assert!(PHONE_REGEX.is_match("+1 555 0100"));
        assert!(PHONE_REGEX.is_match("030 (1234) 5678"));
        assert!(!PHONE_REGEX.is_match("call me"));
        assert!(!PHONE_REGEX.is_match("12"));
    }

    #[test]
    fn test_application_requires_valid_contact() {
        let request = ApplyExhibitorRequest {
            expo_id: Uuid::new_v4(),
            company_name: "Acme".to_string(),
            product_description: String::new(),
            booth_selection: None,
            contact_info: ContactRequest {
                email: "not-an-email".to_string(),
                phone: "+1 555 0100".to_string(),
            },
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_null_selection_differs_from_absent() {
        let cleared: UpdateExhibitorRequest =
            serde_json::from_str(r#"{"booth_selection": null}"#).unwrap();
        assert_eq!(cleared.booth_selection, Some(None));

        let untouched: UpdateExhibitorRequest =
            serde_json::from_str(r#"{"company_name": "Acme Ltd"}"#).unwrap();
        assert_eq!(untouched.booth_selection, None);

        let id = Uuid::new_v4();
        let chosen: UpdateExhibitorRequest =
            serde_json::from_str(&format!(r#"{{"booth_selection": "{}"}}"#, id)).unwrap();
        assert_eq!(ExhibitorChanges::from(chosen).booth_selection, Some(Some(id)));
    }
}
