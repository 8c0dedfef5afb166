//! Hospital service: CRUD over hospitals and their bed capacity fields.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::hospital::{CreateHospital, Hospital, UpdateHospital};

/// List all hospitals.
pub async fn list(pool: &PgPool) -> Result<Vec<Hospital>, AppError> {
    let rows = sqlx::query_as::<_, Hospital>("SELECT * FROM hospitals ORDER BY created_at DESC")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Find a hospital by ID.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Hospital, AppError> {
    sqlx::query_as::<_, Hospital>("SELECT * FROM hospitals WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Hospital not found".to_string()))
}

/// Create a hospital. The hospital_code comes from an atomic sequence.
pub async fn create(pool: &PgPool, input: &CreateHospital) -> Result<Hospital, AppError> {
    let facilities = input
        .facilities
        .as_ref()
        .map(|v| serde_json::to_value(v).unwrap_or_default())
        .unwrap_or(serde_json::json!([]));

    let hospital = sqlx::query_as::<_, Hospital>(
        r#"
        INSERT INTO hospitals (name, address, phone, email, hospital_type, departments,
            facilities, total_beds, available_beds, emergency_services, accreditation,
            website, rating)
        VALUES ($1, COALESCE($2, '{}'::jsonb), $3, $4, $5, COALESCE($6, '[]'::jsonb),
            $7, $8, $9, COALESCE($10, true), $11, $12, COALESCE($13, 0))
        RETURNING *
        "#,
    )
    .bind(&input.name)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(&input.email)
    .bind(input.hospital_type)
    .bind(&input.departments)
    .bind(&facilities)
    .bind(input.total_beds)
    .bind(input.available_beds)
    .bind(input.emergency_services)
    .bind(&input.accreditation)
    .bind(&input.website)
    .bind(input.rating)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(format!("Hospital '{}' already exists", input.name))
        }
        _ => AppError::Database(e),
    })?;

    Ok(hospital)
}

/// Partially update a hospital; absent fields keep their current values.
pub async fn update(pool: &PgPool, id: Uuid, input: &UpdateHospital) -> Result<Hospital, AppError> {
    let facilities = input
        .facilities
        .as_ref()
        .map(|v| serde_json::to_value(v).unwrap_or_default());

    let hospital = sqlx::query_as::<_, Hospital>(
        r#"
        UPDATE hospitals SET
            name = COALESCE($2, name),
            address = COALESCE($3, address),
            phone = COALESCE($4, phone),
            email = COALESCE($5, email),
            hospital_type = COALESCE($6, hospital_type),
            departments = COALESCE($7, departments),
            facilities = COALESCE($8, facilities),
            total_beds = COALESCE($9, total_beds),
            available_beds = COALESCE($10, available_beds),
            emergency_services = COALESCE($11, emergency_services),
            accreditation = COALESCE($12, accreditation),
            website = COALESCE($13, website),
            rating = COALESCE($14, rating),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&input.name)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(&input.email)
    .bind(input.hospital_type)
    .bind(&input.departments)
    .bind(&facilities)
    .bind(input.total_beds)
    .bind(input.available_beds)
    .bind(input.emergency_services)
    .bind(&input.accreditation)
    .bind(&input.website)
    .bind(input.rating)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Hospital not found".to_string()))?;

    Ok(hospital)
}

/// Delete a hospital. Appointments referencing it are left untouched.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM hospitals WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Hospital not found".to_string()));
    }
    Ok(())
}
