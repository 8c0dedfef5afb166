//! Patient service: CRUD over patient profiles joined with user accounts.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::patient::{CreatePatient, Patient, PatientProfile, UpdatePatient};

const PROFILE_SELECT: &str = r#"
    SELECT p.*, u.full_name AS user_name, u.email AS user_email, u.phone AS user_phone
    FROM patients p
    JOIN users u ON u.id = p.user_id
"#;

/// List all patients with their user account details.
pub async fn list(pool: &PgPool) -> Result<Vec<PatientProfile>, AppError> {
    let rows = sqlx::query_as::<_, PatientProfile>(&format!(
        "{PROFILE_SELECT} ORDER BY p.created_at DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Find a patient by ID.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<PatientProfile, AppError> {
    sqlx::query_as::<_, PatientProfile>(&format!("{PROFILE_SELECT} WHERE p.id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Patient not found".to_string()))
}

/// Find the patient profile linked to a user account.
pub async fn find_by_user(pool: &PgPool, user_id: Uuid) -> Result<PatientProfile, AppError> {
    sqlx::query_as::<_, PatientProfile>(&format!("{PROFILE_SELECT} WHERE p.user_id = $1"))
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Patient profile not found".to_string()))
}

/// Create a patient profile owned by the given user. The patient_code is
/// assigned by the database from an atomic sequence.
pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    input: &CreatePatient,
) -> Result<Patient, AppError> {
    let patient = sqlx::query_as::<_, Patient>(
        r#"
        INSERT INTO patients (user_id, date_of_birth, gender, blood_group, address, emergency_contact)
        VALUES ($1, $2, $3, $4, COALESCE($5, '{}'::jsonb), COALESCE($6, '{}'::jsonb))
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(input.date_of_birth)
    .bind(input.gender)
    .bind(&input.blood_group)
    .bind(&input.address)
    .bind(&input.emergency_contact)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("Patient profile already exists for this user".to_string())
        }
        _ => AppError::Database(e),
    })?;

    Ok(patient)
}

/// Partially update a patient; absent fields keep their current values.
pub async fn update(pool: &PgPool, id: Uuid, input: &UpdatePatient) -> Result<Patient, AppError> {
    let patient = sqlx::query_as::<_, Patient>(
        r#"
        UPDATE patients SET
            date_of_birth = COALESCE($2, date_of_birth),
            gender = COALESCE($3, gender),
            blood_group = COALESCE($4, blood_group),
            address = COALESCE($5, address),
            emergency_contact = COALESCE($6, emergency_contact),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(input.date_of_birth)
    .bind(input.gender)
    .bind(&input.blood_group)
    .bind(&input.address)
    .bind(&input.emergency_contact)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Patient not found".to_string()))?;

    Ok(patient)
}

/// Delete a patient. Appointments referencing it are left untouched.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM patients WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Patient not found".to_string()));
    }
    Ok(())
}
