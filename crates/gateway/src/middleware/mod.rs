//! Middleware for bearer authentication and role gating.

mod auth;

pub use auth::{auth_middleware, require_admin, require_role, verify_token, Claims, CurrentUser};
