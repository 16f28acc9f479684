//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Organizer role; the only role allowed to manage expos, booths and approvals
pub const ROLE_ADMIN: &str = "admin";

/// Company representative applying for booths
pub const ROLE_EXHIBITOR: &str = "exhibitor";

/// Visitor registering for an expo
pub const ROLE_ATTENDEE: &str = "attendee";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_EXHIBITOR, ROLE_ATTENDEE];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

// =============================================================================
// Venue
// =============================================================================

/// Default number of floors a venue can book for a single date
pub const DEFAULT_VENUE_MAX_FLOORS: u8 = 4;

/// Lowest booth floor number
pub const FIRST_FLOOR: i32 = 1;

// =============================================================================
// Attendees
// =============================================================================

/// Prefix of generated attendee badge identifiers
pub const BADGE_PREFIX: &str = "BDG-";

/// Number of random characters following the badge prefix
pub const BADGE_RANDOM_LEN: usize = 12;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum name length requirement
pub const MIN_NAME_LENGTH: usize = 1;
