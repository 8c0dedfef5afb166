//! Doctor routes: public reads, admin-gated writes.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::rbac::{RequireAdmin, RequireClinician};
use crate::models::doctor::{CreateDoctor, Doctor, DoctorProfile, UpdateDoctor};
use crate::services::doctor::{self as doctor_service, DoctorFilters};
use crate::AppState;

/// GET /api/doctors — list doctors, optionally filtered by
/// `?specialization=` and `?department=`. Public.
pub async fn list(
    State(state): State<AppState>,
    Query(filters): Query<DoctorFilters>,
) -> Result<Json<ApiResponse<Vec<DoctorProfile>>>, AppError> {
    let doctors = doctor_service::list(&state.db, &filters).await?;
    let count = doctors.len();
    Ok(ApiResponse::success_with_count(doctors, count))
}

/// GET /api/doctors/{id} — get a doctor by ID. Public.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DoctorProfile>>, AppError> {
    let doctor = doctor_service::find_by_id(&state.db, id).await?;
    Ok(ApiResponse::success(doctor))
}

/// POST /api/doctors — create a doctor profile (admin only).
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(body): Json<CreateDoctor>,
) -> Result<Json<ApiResponse<Doctor>>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let doctor = doctor_service::create(&state.db, &body).await?;
    Ok(ApiResponse::success(doctor))
}

/// PUT /api/doctors/{id} — update a doctor (admin or doctor).
pub async fn update(
    State(state): State<AppState>,
    RequireClinician(_user): RequireClinician,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateDoctor>,
) -> Result<Json<ApiResponse<Doctor>>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let doctor = doctor_service::update(&state.db, id, &body).await?;
    Ok(ApiResponse::success(doctor))
}

/// DELETE /api/doctors/{id} — delete a doctor (admin only).
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    doctor_service::delete(&state.db, id).await?;
    Ok(ApiResponse::message("Doctor deleted successfully"))
}
