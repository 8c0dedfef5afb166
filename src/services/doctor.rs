//! Doctor service: CRUD with optional specialization/department filters.

use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::doctor::{CreateDoctor, Doctor, DoctorProfile, UpdateDoctor};

/// Query-string filters for listing doctors.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DoctorFilters {
    pub specialization: Option<String>,
    pub department: Option<String>,
}

const PROFILE_SELECT: &str = r#"
    SELECT d.*, u.full_name AS user_name, u.email AS user_email, u.phone AS user_phone
    FROM doctors d
    JOIN users u ON u.id = d.user_id
"#;

/// List doctors matching the given filters.
pub async fn list(pool: &PgPool, filters: &DoctorFilters) -> Result<Vec<DoctorProfile>, AppError> {
    let rows = sqlx::query_as::<_, DoctorProfile>(&format!(
        r#"
        {PROFILE_SELECT}
        WHERE ($1::text IS NULL OR d.specialization = $1)
          AND ($2::text IS NULL OR d.department = $2)
        ORDER BY d.created_at DESC
        "#
    ))
    .bind(&filters.specialization)
    .bind(&filters.department)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Find a doctor by ID.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<DoctorProfile, AppError> {
    sqlx::query_as::<_, DoctorProfile>(&format!("{PROFILE_SELECT} WHERE d.id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))
}

/// Create a doctor profile. The doctor_code comes from an atomic sequence.
pub async fn create(pool: &PgPool, input: &CreateDoctor) -> Result<Doctor, AppError> {
    let awards = input
        .awards
        .as_ref()
        .map(|v| serde_json::to_value(v).unwrap_or_default())
        .unwrap_or(serde_json::json!([]));

    let doctor = sqlx::query_as::<_, Doctor>(
        r#"
        INSERT INTO doctors (user_id, specialization, qualification, experience,
            license_number, department, consultation_fee, availability, biography, awards)
        VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, '[]'::jsonb), $9, $10)
        RETURNING *
        "#,
    )
    .bind(input.user_id)
    .bind(&input.specialization)
    .bind(&input.qualification)
    .bind(input.experience)
    .bind(&input.license_number)
    .bind(&input.department)
    .bind(input.consultation_fee)
    .bind(&input.availability)
    .bind(&input.biography)
    .bind(&awards)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(format!(
                "Doctor with license '{}' already exists",
                input.license_number
            ))
        }
        _ => AppError::Database(e),
    })?;

    Ok(doctor)
}

/// Partially update a doctor; absent fields keep their current values.
pub async fn update(pool: &PgPool, id: Uuid, input: &UpdateDoctor) -> Result<Doctor, AppError> {
    let awards = input
        .awards
        .as_ref()
        .map(|v| serde_json::to_value(v).unwrap_or_default());

    let doctor = sqlx::query_as::<_, Doctor>(
        r#"
        UPDATE doctors SET
            specialization = COALESCE($2, specialization),
            qualification = COALESCE($3, qualification),
            experience = COALESCE($4, experience),
            department = COALESCE($5, department),
            consultation_fee = COALESCE($6, consultation_fee),
            availability = COALESCE($7, availability),
            rating = COALESCE($8, rating),
            total_patients = COALESCE($9, total_patients),
            biography = COALESCE($10, biography),
            awards = COALESCE($11, awards),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&input.specialization)
    .bind(&input.qualification)
    .bind(input.experience)
    .bind(&input.department)
    .bind(input.consultation_fee)
    .bind(&input.availability)
    .bind(input.rating)
    .bind(input.total_patients)
    .bind(&input.biography)
    .bind(&awards)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))?;

    Ok(doctor)
}

/// Delete a doctor. Appointments referencing it are left untouched.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM doctors WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Doctor not found".to_string()));
    }
    Ok(())
}
