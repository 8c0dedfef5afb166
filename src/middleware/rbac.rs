//! Role-based access control extractors for Axum handlers.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;
use crate::middleware::auth::CurrentUser;
use crate::models::user::UserRole;
use crate::AppState;

/// Extractor that requires the admin role.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub CurrentUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        if user.role != UserRole::Admin {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }
        Ok(RequireAdmin(user))
    }
}

/// Extractor that requires an admin, doctor, or staff role.
#[derive(Debug, Clone)]
pub struct RequireStaff(pub CurrentUser);

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        match user.role {
            UserRole::Admin | UserRole::Doctor | UserRole::Staff => Ok(RequireStaff(user)),
            _ => Err(AppError::Forbidden(
                "Admin, doctor, or staff access required".to_string(),
            )),
        }
    }
}

/// Extractor that requires an admin or doctor role.
#[derive(Debug, Clone)]
pub struct RequireClinician(pub CurrentUser);

impl FromRequestParts<AppState> for RequireClinician {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        match user.role {
            UserRole::Admin | UserRole::Doctor => Ok(RequireClinician(user)),
            _ => Err(AppError::Forbidden(
                "Admin or doctor access required".to_string(),
            )),
        }
    }
}

/// Extractor that requires the patient role.
#[derive(Debug, Clone)]
pub struct RequirePatient(pub CurrentUser);

impl FromRequestParts<AppState> for RequirePatient {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        if user.role != UserRole::Patient {
            return Err(AppError::Forbidden("Patient access required".to_string()));
        }
        Ok(RequirePatient(user))
    }
}
