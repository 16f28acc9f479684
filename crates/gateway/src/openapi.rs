//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::attendee_handler::{AttendeeStatusRequest, RegisterAttendeeRequest};
use crate::handlers::booth_handler::{BoothStatusRequest, CreateBoothRequest, UpdateBoothRequest};
use crate::handlers::exhibitor_handler::{
    ApplyExhibitorRequest, ContactRequest, UpdateExhibitorRequest,
};
use crate::handlers::expo_handler::{
    CreateExpoRequest, ExpoStatusRequest, PlacementResponse, UpdateExpoRequest,
};
use crate::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};
use crate::handlers::schedule_handler::{CreateScheduleRequest, UpdateScheduleRequest};
use crate::handlers::user_handler::CreateUserRequest;
use domain::{
    Attendee, AttendeeStatus, Booth, BoothStatus, ContactInfo, Exhibitor, ExhibitorStatus, Expo,
    ExpoStatus, ExpoSummary, FloorAvailability, Schedule, SizeUnit, TimeSlot, UserResponse,
    UserRole,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::expo_handler::list_expos,
        crate::handlers::expo_handler::create_expo,
        crate::handlers::expo_handler::available_floors,
        crate::handlers::expo_handler::check_placement,
        crate::handlers::expo_handler::get_expo,
        crate::handlers::expo_handler::update_expo,
        crate::handlers::expo_handler::set_expo_status,
        crate::handlers::expo_handler::delete_expo,
        crate::handlers::booth_handler::list_booths,
        crate::handlers::booth_handler::create_booth,
        crate::handlers::booth_handler::get_booth,
        crate::handlers::booth_handler::update_booth,
        crate::handlers::booth_handler::set_booth_status,
        crate::handlers::booth_handler::delete_booth,
        crate::handlers::exhibitor_handler::apply,
        crate::handlers::exhibitor_handler::list_exhibitors,
        crate::handlers::exhibitor_handler::get_exhibitor,
        crate::handlers::exhibitor_handler::update_exhibitor,
        crate::handlers::exhibitor_handler::approve_exhibitor,
        crate::handlers::exhibitor_handler::reject_exhibitor,
        crate::handlers::exhibitor_handler::delete_exhibitor,
        crate::handlers::attendee_handler::register_attendee,
        crate::handlers::attendee_handler::list_attendees,
        crate::handlers::attendee_handler::find_by_badge,
        crate::handlers::attendee_handler::get_attendee,
        crate::handlers::attendee_handler::set_attendee_status,
        crate::handlers::attendee_handler::delete_attendee,
        crate::handlers::schedule_handler::list_schedules,
        crate::handlers::schedule_handler::create_schedule,
        crate::handlers::schedule_handler::get_schedule,
        crate::handlers::schedule_handler::update_schedule,
        crate::handlers::schedule_handler::delete_schedule,
        crate::handlers::user_handler::get_current_user,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::get_user,
    ),
    components(
        schemas(
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
            Expo,
            ExpoStatus,
            ExpoSummary,
            FloorAvailability,
            CreateExpoRequest,
            UpdateExpoRequest,
            ExpoStatusRequest,
            PlacementResponse,
            Booth,
            BoothStatus,
            SizeUnit,
            CreateBoothRequest,
            UpdateBoothRequest,
            BoothStatusRequest,
            Exhibitor,
            ExhibitorStatus,
            ContactInfo,
            ContactRequest,
            ApplyExhibitorRequest,
            UpdateExhibitorRequest,
            Attendee,
            AttendeeStatus,
            RegisterAttendeeRequest,
            AttendeeStatusRequest,
            Schedule,
            TimeSlot,
            CreateScheduleRequest,
            UpdateScheduleRequest,
            UserResponse,
            UserRole,
            CreateUserRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Expos", description = "Expo scheduling and floor availability"),
        (name = "Booths", description = "Booth allocation per expo floor"),
        (name = "Exhibitors", description = "Exhibitor applications and approval"),
        (name = "Attendees", description = "Attendee registration and badges"),
        (name = "Schedules", description = "Expo session schedule"),
        (name = "Users", description = "User records"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
