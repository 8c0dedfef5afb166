//! Authentication routes: register, login, current user.

use axum::{extract::State, Json};
use validator::Validate;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::models::user::{LoginRequest, RegisterUser, UserResponse};
use crate::services::auth::{self as auth_service, AuthResponse};
use crate::AppState;

/// POST /api/auth/register — create a user account and return tokens.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterUser>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let response = auth_service::register(&state.db, &state.config, &body).await?;
    Ok(ApiResponse::success(response))
}

/// POST /api/auth/login — authenticate and return tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    let response = auth_service::login(&state.db, &state.config, &body).await?;
    Ok(ApiResponse::success(response))
}

/// GET /api/auth/me — the authenticated user's profile.
pub async fn me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let profile = auth_service::me(&state.db, user.id).await?;
    Ok(ApiResponse::success(profile))
}
