//! Appointment service: scoped reads and CRUD.
//!
//! Reads are filtered by the caller's [`AccessScope`] so role-based
//! visibility is decided once per request, not per query site.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::middleware::auth::AccessScope;
use crate::models::appointment::{
    Appointment, AppointmentView, CreateAppointment, UpdateAppointment,
};

const VIEW_SELECT: &str = r#"
    SELECT a.*,
           p.patient_code AS patient_code,
           d.doctor_code AS doctor_code,
           h.name AS hospital_name
    FROM appointments a
    LEFT JOIN patients p ON p.id = a.patient_id
    LEFT JOIN doctors d ON d.id = a.doctor_id
    LEFT JOIN hospitals h ON h.id = a.hospital_id
"#;

/// List appointments visible to the given scope, newest first.
pub async fn list(pool: &PgPool, scope: AccessScope) -> Result<Vec<AppointmentView>, AppError> {
    let rows = match scope {
        AccessScope::All => {
            sqlx::query_as::<_, AppointmentView>(&format!(
                "{VIEW_SELECT} ORDER BY a.created_at DESC"
            ))
            .fetch_all(pool)
            .await?
        }
        AccessScope::Patient(id) => {
            sqlx::query_as::<_, AppointmentView>(&format!(
                "{VIEW_SELECT} WHERE a.patient_id = $1 ORDER BY a.created_at DESC"
            ))
            .bind(id)
            .fetch_all(pool)
            .await?
        }
        AccessScope::Doctor(id) => {
            sqlx::query_as::<_, AppointmentView>(&format!(
                "{VIEW_SELECT} WHERE a.doctor_id = $1 ORDER BY a.created_at DESC"
            ))
            .bind(id)
            .fetch_all(pool)
            .await?
        }
        AccessScope::Unlinked => Vec::new(),
    };
    Ok(rows)
}

/// List the caller's own appointments, ordered by appointment date descending.
pub async fn list_mine(pool: &PgPool, scope: AccessScope) -> Result<Vec<AppointmentView>, AppError> {
    let rows = match scope {
        AccessScope::All => {
            sqlx::query_as::<_, AppointmentView>(&format!(
                "{VIEW_SELECT} ORDER BY a.appointment_date DESC"
            ))
            .fetch_all(pool)
            .await?
        }
        AccessScope::Patient(id) => {
            sqlx::query_as::<_, AppointmentView>(&format!(
                "{VIEW_SELECT} WHERE a.patient_id = $1 ORDER BY a.appointment_date DESC"
            ))
            .bind(id)
            .fetch_all(pool)
            .await?
        }
        AccessScope::Doctor(id) => {
            sqlx::query_as::<_, AppointmentView>(&format!(
                "{VIEW_SELECT} WHERE a.doctor_id = $1 ORDER BY a.appointment_date DESC"
            ))
            .bind(id)
            .fetch_all(pool)
            .await?
        }
        AccessScope::Unlinked => Vec::new(),
    };
    Ok(rows)
}

/// Find an appointment by ID with related display identifiers.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<AppointmentView, AppError> {
    sqlx::query_as::<_, AppointmentView>(&format!("{VIEW_SELECT} WHERE a.id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))
}

/// Create an appointment. The appointment_code comes from an atomic sequence;
/// status starts as Scheduled and payment as Pending.
pub async fn create(pool: &PgPool, input: &CreateAppointment) -> Result<Appointment, AppError> {
    let appointment = sqlx::query_as::<_, Appointment>(
        r#"
        INSERT INTO appointments (patient_id, doctor_id, hospital_id, appointment_date,
            time_slot, appointment_type, symptoms, fee)
        VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'Consultation'::appointment_type), $7, $8)
        RETURNING *
        "#,
    )
    .bind(input.patient_id)
    .bind(input.doctor_id)
    .bind(input.hospital_id)
    .bind(input.appointment_date)
    .bind(&input.time_slot)
    .bind(input.appointment_type)
    .bind(&input.symptoms)
    .bind(input.fee)
    .fetch_one(pool)
    .await?;

    Ok(appointment)
}

/// Partially update an appointment. Status accepts any enum value; no
/// transition rules are enforced.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: &UpdateAppointment,
) -> Result<Appointment, AppError> {
    let appointment = sqlx::query_as::<_, Appointment>(
        r#"
        UPDATE appointments SET
            appointment_date = COALESCE($2, appointment_date),
            time_slot = COALESCE($3, time_slot),
            appointment_type = COALESCE($4, appointment_type),
            status = COALESCE($5, status),
            symptoms = COALESCE($6, symptoms),
            diagnosis = COALESCE($7, diagnosis),
            prescription = COALESCE($8, prescription),
            notes = COALESCE($9, notes),
            fee = COALESCE($10, fee),
            payment_status = COALESCE($11, payment_status),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(input.appointment_date)
    .bind(&input.time_slot)
    .bind(input.appointment_type)
    .bind(input.status)
    .bind(&input.symptoms)
    .bind(&input.diagnosis)
    .bind(&input.prescription)
    .bind(&input.notes)
    .bind(input.fee)
    .bind(input.payment_status)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

    Ok(appointment)
}

/// Delete an appointment.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Appointment not found".to_string()));
    }
    Ok(())
}
