//! Dashboard statistics aggregation queries.
//!
//! Eight independent read-only queries are joined with `tokio::try_join!`;
//! if any one fails the whole aggregation fails. The sub-counts are not an
//! atomic snapshot — each can reflect a different instant under concurrent
//! writes, which is acceptable for a dashboard.

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::appointment::AppointmentStatus;

/// Aggregated dashboard statistics for the main overview page.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_patients: i64,
    pub total_doctors: i64,
    pub total_hospitals: i64,
    pub total_appointments: i64,
    pub today_appointments: i64,
    pub scheduled_appointments: i64,
    pub completed_appointments: i64,
    pub total_beds: i64,
    pub total_available_beds: i64,
    pub occupancy_rate: f64,
    pub recent_appointments: Vec<RecentAppointment>,
}

/// Recently created appointment with related display identifiers attached.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct RecentAppointment {
    pub id: Uuid,
    pub appointment_code: String,
    pub patient_code: Option<String>,
    pub doctor_code: Option<String>,
    pub hospital_name: Option<String>,
    pub appointment_date: DateTime<Utc>,
    pub time_slot: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

/// Fetch all dashboard statistics in parallel queries.
pub async fn get_stats(pool: &PgPool) -> Result<DashboardStats, AppError> {
    let (
        total_patients,
        total_doctors,
        total_hospitals,
        total_appointments,
        today_appointments,
        status_counts,
        bed_totals,
        recent_appointments,
    ) = tokio::try_join!(
        fetch_count(pool, "patients"),
        fetch_count(pool, "doctors"),
        fetch_count(pool, "hospitals"),
        fetch_count(pool, "appointments"),
        fetch_today_appointments(pool),
        fetch_status_counts(pool),
        fetch_bed_totals(pool),
        fetch_recent_appointments(pool),
    )?;

    Ok(DashboardStats {
        total_patients,
        total_doctors,
        total_hospitals,
        total_appointments,
        today_appointments,
        scheduled_appointments: status_counts.scheduled,
        completed_appointments: status_counts.completed,
        total_beds: bed_totals.total_beds,
        total_available_beds: bed_totals.available_beds,
        occupancy_rate: occupancy_rate(bed_totals.total_beds, bed_totals.available_beds),
        recent_appointments,
    })
}

/// Bed occupancy percentage, rounded to one decimal. Zero total beds means
/// zero occupancy regardless of the available count.
pub fn occupancy_rate(total_beds: i64, available_beds: i64) -> f64 {
    if total_beds <= 0 {
        return 0.0;
    }
    let rate = (total_beds - available_beds) as f64 / total_beds as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}

/// Half-open UTC window `[midnight, next midnight)` for a calendar day in
/// the server's local time zone. Includes 00:00:00 and 23:59:59 of the day,
/// excludes the next day's midnight.
pub fn day_window(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let next = date.succ_opt().unwrap_or(date);
    (local_midnight(date), local_midnight(next))
}

/// UTC window for the current calendar day in local server time.
pub fn today_window() -> (DateTime<Utc>, DateTime<Utc>) {
    day_window(Local::now().date_naive())
}

fn local_midnight(date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(t) => t.with_timezone(&Utc),
        // DST transitions at midnight: take the earlier interpretation.
        LocalResult::Ambiguous(t, _) => t.with_timezone(&Utc),
        LocalResult::None => naive.and_utc(),
    }
}

/// Total row count of an entity table. The table name is a compile-time
/// constant from the call sites above, never user input.
async fn fetch_count(pool: &PgPool, table: &str) -> Result<i64, AppError> {
    let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Count appointments dated within the current local calendar day.
async fn fetch_today_appointments(pool: &PgPool) -> Result<i64, AppError> {
    let (start, end) = today_window();
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM appointments WHERE appointment_date >= $1 AND appointment_date < $2",
    )
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await?;
    Ok(count)
}

/// Intermediate row for status conditional aggregation.
#[derive(Debug, sqlx::FromRow)]
struct StatusCounts {
    scheduled: i64,
    completed: i64,
}

/// Count scheduled and completed appointments in a single query.
async fn fetch_status_counts(pool: &PgPool) -> Result<StatusCounts, AppError> {
    let row = sqlx::query_as::<_, StatusCounts>(
        r#"
        SELECT
            COALESCE(SUM(CASE WHEN status = 'Scheduled' THEN 1 ELSE 0 END), 0) AS scheduled,
            COALESCE(SUM(CASE WHEN status = 'Completed' THEN 1 ELSE 0 END), 0) AS completed
        FROM appointments
        "#,
    )
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Intermediate row for bed capacity sums.
#[derive(Debug, sqlx::FromRow)]
struct BedTotals {
    total_beds: i64,
    available_beds: i64,
}

/// Sum total and available beds across all hospitals.
async fn fetch_bed_totals(pool: &PgPool) -> Result<BedTotals, AppError> {
    let row = sqlx::query_as::<_, BedTotals>(
        r#"
        SELECT
            COALESCE(SUM(total_beds), 0)::BIGINT AS total_beds,
            COALESCE(SUM(available_beds), 0)::BIGINT AS available_beds
        FROM hospitals
        "#,
    )
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Fetch the 5 most recently created appointments with display identifiers.
async fn fetch_recent_appointments(pool: &PgPool) -> Result<Vec<RecentAppointment>, AppError> {
    let rows = sqlx::query_as::<_, RecentAppointment>(
        r#"
        SELECT a.id, a.appointment_code,
               p.patient_code AS patient_code,
               d.doctor_code AS doctor_code,
               h.name AS hospital_name,
               a.appointment_date, a.time_slot, a.status, a.created_at
        FROM appointments a
        LEFT JOIN patients p ON p.id = a.patient_id
        LEFT JOIN doctors d ON d.id = a.doctor_id
        LEFT JOIN hospitals h ON h.id = a.hospital_id
        ORDER BY a.created_at DESC
        LIMIT 5
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn occupancy_zero_total_beds() {
        assert_eq!(occupancy_rate(0, 0), 0.0);
        assert_eq!(occupancy_rate(0, 25), 0.0);
    }

    #[test]
    fn occupancy_basic() {
        assert_eq!(occupancy_rate(100, 25), 75.0);
        assert_eq!(occupancy_rate(100, 100), 0.0);
        assert_eq!(occupancy_rate(100, 0), 100.0);
    }

    #[test]
    fn occupancy_rounds_to_one_decimal() {
        // 2/3 occupied = 66.666... -> 66.7
        assert_eq!(occupancy_rate(3, 1), 66.7);
        // 1/3 occupied = 33.333... -> 33.3
        assert_eq!(occupancy_rate(3, 2), 33.3);
    }

    #[test]
    fn day_window_spans_exactly_one_day() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let (start, end) = day_window(date);
        assert_eq!(end - start, Duration::days(1));
    }

    #[test]
    fn day_window_boundary_inclusion() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let (start, end) = day_window(date);

        let first_second = start;
        let last_second = end - Duration::seconds(1); // 23:59:59 local
        let next_midnight = end;

        assert!(first_second >= start && first_second < end);
        assert!(last_second >= start && last_second < end);
        assert!(!(next_midnight < end));
    }

    #[test]
    fn today_window_contains_now() {
        let (start, end) = today_window();
        let now = Utc::now();
        assert!(now >= start && now < end);
    }
}
