//! Hospital routes: public reads, admin-gated writes.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::rbac::RequireAdmin;
use crate::models::hospital::{CreateHospital, Hospital, UpdateHospital};
use crate::services::hospital as hospital_service;
use crate::AppState;

/// GET /api/hospitals — list all hospitals. Public.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Hospital>>>, AppError> {
    let hospitals = hospital_service::list(&state.db).await?;
    let count = hospitals.len();
    Ok(ApiResponse::success_with_count(hospitals, count))
}

/// GET /api/hospitals/{id} — get a hospital by ID. Public.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Hospital>>, AppError> {
    let hospital = hospital_service::find_by_id(&state.db, id).await?;
    Ok(ApiResponse::success(hospital))
}

/// POST /api/hospitals — create a hospital (admin only).
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(body): Json<CreateHospital>,
) -> Result<Json<ApiResponse<Hospital>>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let hospital = hospital_service::create(&state.db, &body).await?;
    Ok(ApiResponse::success(hospital))
}

/// PUT /api/hospitals/{id} — update a hospital (admin only).
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateHospital>,
) -> Result<Json<ApiResponse<Hospital>>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let hospital = hospital_service::update(&state.db, id, &body).await?;
    Ok(ApiResponse::success(hospital))
}

/// DELETE /api/hospitals/{id} — delete a hospital (admin only). Existing
/// appointments referencing it are left untouched.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    hospital_service::delete(&state.db, id).await?;
    Ok(ApiResponse::message("Hospital deleted successfully"))
}
