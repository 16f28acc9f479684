//! Authentication middleware.
//!
//! Tokens are issued by an external auth collaborator and signed with the
//! shared HS256 secret. The gateway only verifies them.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::UserRole;

use crate::state::AppState;

/// JWT claims carried by principal tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub exp: i64,
}

/// Current authenticated user extracted from JWT.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
}

impl CurrentUser {
    /// Check if user has admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl TryFrom<Claims> for CurrentUser {
    type Error = AppError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let role = claims.role.parse::<UserRole>().map_err(|_| {
            tracing::debug!(role = %claims.role, "Token carries an unknown role");
            AppError::Unauthorized
        })?;

        Ok(Self {
            id: claims.sub,
            email: claims.email,
            role,
        })
    }
}

/// Check if user has admin privileges.
pub fn require_admin(user: &CurrentUser) -> AppResult<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Check if user may act with the given role. Admins pass every check.
pub fn require_role(user: &CurrentUser, role: UserRole) -> AppResult<()> {
    if user.role.can_access(role) {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Verify a bearer token and turn its claims into the current user.
pub fn verify_token(token: &str, secret: &str) -> AppResult<CurrentUser> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    CurrentUser::try_from(data.claims)
}

/// Authentication middleware that validates JWT tokens.
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(AppError::Unauthorized)?;

    let current_user = verify_token(bearer.token(), &state.config.jwt.secret)?;

    // Insert current user into request extensions
    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}
