//! Patient routes: CRUD plus the caller's own profile.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::middleware::rbac::{RequireAdmin, RequirePatient, RequireStaff};
use crate::models::patient::{CreatePatient, Patient, PatientProfile, UpdatePatient};
use crate::services::patient as patient_service;
use crate::AppState;

/// GET /api/patients — list all patients (admin/doctor/staff).
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
) -> Result<Json<ApiResponse<Vec<PatientProfile>>>, AppError> {
    let patients = patient_service::list(&state.db).await?;
    let count = patients.len();
    Ok(ApiResponse::success_with_count(patients, count))
}

/// GET /api/patients/my-profile — the caller's own patient profile.
pub async fn my_profile(
    State(state): State<AppState>,
    RequirePatient(user): RequirePatient,
) -> Result<Json<ApiResponse<PatientProfile>>, AppError> {
    let patient = patient_service::find_by_user(&state.db, user.id).await?;
    Ok(ApiResponse::success(patient))
}

/// GET /api/patients/{id} — get a patient by ID.
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PatientProfile>>, AppError> {
    let patient = patient_service::find_by_id(&state.db, id).await?;
    Ok(ApiResponse::success(patient))
}

/// POST /api/patients — create a patient profile owned by the caller.
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<CreatePatient>,
) -> Result<Json<ApiResponse<Patient>>, AppError> {
    let patient = patient_service::create(&state.db, user.id, &body).await?;
    Ok(ApiResponse::success(patient))
}

/// PUT /api/patients/{id} — update a patient.
pub async fn update(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdatePatient>,
) -> Result<Json<ApiResponse<Patient>>, AppError> {
    let patient = patient_service::update(&state.db, id, &body).await?;
    Ok(ApiResponse::success(patient))
}

/// DELETE /api/patients/{id} — delete a patient (admin only).
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    patient_service::delete(&state.db, id).await?;
    Ok(ApiResponse::message("Patient deleted successfully"))
}
