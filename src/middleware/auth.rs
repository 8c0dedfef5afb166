//! JWT authentication extractors for Axum handlers.

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::UserRole;
use crate::services::auth as auth_service;
use crate::AppState;

/// Authenticated user extracted from a JWT Bearer token.
///
/// Use as an Axum extractor in handlers that require authentication:
/// ```ignore
/// async fn handler(current_user: CurrentUser) -> impl IntoResponse { ... }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let claims = auth_service::validate_token(token, &state.config.jwt_secret)?;

        if claims.token_type != "access" {
            return Err(AppError::Unauthorized);
        }

        let user_id: Uuid = claims.user_id.parse().map_err(|_| AppError::Unauthorized)?;

        let role: UserRole = serde_json::from_str(&format!("\"{}\"", claims.role))
            .map_err(|_| AppError::Internal(format!("Invalid role in token: {}", claims.role)))?;

        Ok(CurrentUser {
            id: user_id,
            username: claims.sub,
            role,
        })
    }
}

/// Per-request authorization scope for appointment reads, resolved once from
/// the authenticated user instead of re-deriving the role ad hoc in every
/// handler. Admin and staff see everything; doctors and patients see only
/// appointments attached to their own profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessScope {
    All,
    Patient(Uuid),
    Doctor(Uuid),
    /// Authenticated user with no linked patient/doctor profile; resolves to
    /// an empty result set rather than falling through to everything.
    Unlinked,
}

impl FromRequestParts<AppState> for AccessScope {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        match user.role {
            UserRole::Admin | UserRole::Staff => Ok(AccessScope::All),
            UserRole::Patient => {
                let id: Option<Uuid> =
                    sqlx::query_scalar("SELECT id FROM patients WHERE user_id = $1")
                        .bind(user.id)
                        .fetch_optional(&state.db)
                        .await
                        .map_err(AppError::Database)?;
                Ok(id.map_or(AccessScope::Unlinked, AccessScope::Patient))
            }
            UserRole::Doctor => {
                let id: Option<Uuid> =
                    sqlx::query_scalar("SELECT id FROM doctors WHERE user_id = $1")
                        .bind(user.id)
                        .fetch_optional(&state.db)
                        .await
                        .map_err(AppError::Database)?;
                Ok(id.map_or(AccessScope::Unlinked, AccessScope::Doctor))
            }
        }
    }
}
