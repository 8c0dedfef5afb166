//! Appointment routes: scoped listing plus CRUD.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::{AccessScope, CurrentUser};
use crate::middleware::rbac::RequireAdmin;
use crate::models::appointment::{
    Appointment, AppointmentView, CreateAppointment, UpdateAppointment,
};
use crate::services::appointment as appointment_service;
use crate::AppState;

/// GET /api/appointments — list appointments visible to the caller's scope.
pub async fn list(
    State(state): State<AppState>,
    scope: AccessScope,
) -> Result<Json<ApiResponse<Vec<AppointmentView>>>, AppError> {
    let appointments = appointment_service::list(&state.db, scope).await?;
    let count = appointments.len();
    Ok(ApiResponse::success_with_count(appointments, count))
}

/// GET /api/appointments/my-appointments — the caller's own appointments,
/// ordered by appointment date descending.
pub async fn my_appointments(
    State(state): State<AppState>,
    scope: AccessScope,
) -> Result<Json<ApiResponse<Vec<AppointmentView>>>, AppError> {
    let appointments = appointment_service::list_mine(&state.db, scope).await?;
    let count = appointments.len();
    Ok(ApiResponse::success_with_count(appointments, count))
}

/// GET /api/appointments/{id} — get an appointment by ID.
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AppointmentView>>, AppError> {
    let appointment = appointment_service::find_by_id(&state.db, id).await?;
    Ok(ApiResponse::success(appointment))
}

/// POST /api/appointments — create an appointment.
pub async fn create(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(body): Json<CreateAppointment>,
) -> Result<Json<ApiResponse<Appointment>>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let appointment = appointment_service::create(&state.db, &body).await?;
    Ok(ApiResponse::success(appointment))
}

/// PUT /api/appointments/{id} — update an appointment.
pub async fn update(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateAppointment>,
) -> Result<Json<ApiResponse<Appointment>>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let appointment = appointment_service::update(&state.db, id, &body).await?;
    Ok(ApiResponse::success(appointment))
}

/// DELETE /api/appointments/{id} — delete an appointment (admin only).
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    appointment_service::delete(&state.db, id).await?;
    Ok(ApiResponse::message("Appointment deleted successfully"))
}
