//! Seed script for development — populates a fresh database with sample data.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires `DATABASE_URL` (reads .env). Safe to re-run: each step skips
//! when its data already exists.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

const SEED_PASSWORD: &str = "Test123!";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    println!("=== CareDesk Seed Script ===");

    seed_users(&pool).await?;
    seed_hospitals(&pool).await?;
    seed_doctors(&pool).await?;
    seed_patients(&pool).await?;
    seed_appointments(&pool).await?;

    println!("\n=== Seed complete! ===");
    println!("Admin login: admin / {SEED_PASSWORD}");

    Ok(())
}

async fn seed_users(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Users already exist ({count})");
        return Ok(());
    }

    let hash = caredesk::services::auth::hash_password(SEED_PASSWORD)?;

    let users = vec![
        ("admin", "admin@caredesk.local", "System Administrator", "admin"),
        ("frontdesk", "frontdesk@caredesk.local", "Front Desk", "staff"),
        ("drchen", "drchen@caredesk.local", "Dr. Maya Chen", "doctor"),
        ("drpatel", "drpatel@caredesk.local", "Dr. Arjun Patel", "doctor"),
        ("jdoe", "jdoe@caredesk.local", "John Doe", "patient"),
        ("asmith", "asmith@caredesk.local", "Alice Smith", "patient"),
    ];

    for (username, email, full_name, role) in users {
        sqlx::query(
            "INSERT INTO users (username, email, password_hash, full_name, role)
             VALUES ($1, $2, $3, $4, $5::user_role)",
        )
        .bind(username)
        .bind(email)
        .bind(&hash)
        .bind(full_name)
        .bind(role)
        .execute(pool)
        .await?;
    }

    println!("[done] Created 6 users");
    Ok(())
}

async fn seed_hospitals(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hospitals")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Hospitals already exist ({count})");
        return Ok(());
    }

    let hospitals = vec![
        ("City General Hospital", "Government", 500, 125, true),
        ("Lakeside Medical Center", "Private", 220, 60, true),
        ("Northside Community Clinic", "Semi-Government", 80, 55, false),
    ];

    for (name, kind, total, available, emergency) in hospitals {
        sqlx::query(
            r#"
            INSERT INTO hospitals (name, address, phone, email, hospital_type,
                facilities, total_beds, available_beds, emergency_services, rating)
            VALUES ($1, $2, '555-0100', $3, $4::hospital_type,
                '["ICU", "Pharmacy", "Laboratory"]'::jsonb, $5, $6, $7, 4.2)
            "#,
        )
        .bind(name)
        .bind(serde_json::json!({
            "street": "42 Main St", "city": "Springfield",
            "state": "IL", "zipCode": "62701", "country": "USA"
        }))
        .bind(format!(
            "info@{}.test",
            name.to_lowercase().replace(' ', "")
        ))
        .bind(kind)
        .bind(total)
        .bind(available)
        .bind(emergency)
        .execute(pool)
        .await?;
    }

    println!("[done] Created 3 hospitals");
    Ok(())
}

async fn seed_doctors(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM doctors")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Doctors already exist ({count})");
        return Ok(());
    }

    let doctors = vec![
        ("drchen", "Cardiology", "MBBS, MD", 14, "LIC-0001", "Cardiology", 200.0),
        ("drpatel", "Pediatrics", "MBBS, DCH", 8, "LIC-0002", "Pediatrics", 120.0),
    ];

    for (username, spec, qual, exp, license, dept, fee) in doctors {
        let user_id: Uuid = sqlx::query_scalar("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_one(pool)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO doctors (user_id, specialization, qualification, experience,
                license_number, department, consultation_fee, availability, rating)
            VALUES ($1, $2, $3, $4, $5, $6, $7,
                '[{"day": "Monday", "startTime": "09:00", "endTime": "17:00", "isAvailable": true}]'::jsonb,
                4.5)
            "#,
        )
        .bind(user_id)
        .bind(spec)
        .bind(qual)
        .bind(exp)
        .bind(license)
        .bind(dept)
        .bind(fee)
        .execute(pool)
        .await?;
    }

    println!("[done] Created 2 doctors");
    Ok(())
}

async fn seed_patients(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM patients")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Patients already exist ({count})");
        return Ok(());
    }

    let patients = vec![
        ("jdoe", "1985-03-12", "Male", "O+"),
        ("asmith", "1992-11-30", "Female", "A-"),
    ];

    for (username, dob, gender, blood) in patients {
        let user_id: Uuid = sqlx::query_scalar("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_one(pool)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO patients (user_id, date_of_birth, gender, blood_group,
                address, emergency_contact)
            VALUES ($1, $2::date, $3::gender, $4, $5, $6)
            "#,
        )
        .bind(user_id)
        .bind(dob)
        .bind(gender)
        .bind(blood)
        .bind(serde_json::json!({
            "street": "7 Oak Ave", "city": "Springfield",
            "state": "IL", "zipCode": "62702", "country": "USA"
        }))
        .bind(serde_json::json!({
            "name": "Jane Doe", "relationship": "Spouse", "phone": "555-0142"
        }))
        .execute(pool)
        .await?;
    }

    println!("[done] Created 2 patients");
    Ok(())
}

async fn seed_appointments(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM appointments")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Appointments already exist ({count})");
        return Ok(());
    }

    let patient_ids: Vec<Uuid> = sqlx::query_scalar("SELECT id FROM patients ORDER BY patient_code")
        .fetch_all(pool)
        .await?;
    let doctor_ids: Vec<Uuid> = sqlx::query_scalar("SELECT id FROM doctors ORDER BY doctor_code")
        .fetch_all(pool)
        .await?;
    let hospital_ids: Vec<Uuid> =
        sqlx::query_scalar("SELECT id FROM hospitals ORDER BY hospital_code")
            .fetch_all(pool)
            .await?;

    let now = Utc::now();
    let slots = [
        (now - Duration::days(7), "10:00-10:30", "Completed", "Paid"),
        (now - Duration::days(1), "14:00-14:30", "No-Show", "Pending"),
        (now, "09:00-09:30", "In-Progress", "Pending"),
        (now + Duration::days(2), "11:00-11:30", "Scheduled", "Pending"),
        (now + Duration::days(5), "15:00-15:30", "Scheduled", "Pending"),
        (now + Duration::days(9), "16:00-16:30", "Cancelled", "Pending"),
    ];

    for (i, (date, slot, status, payment)) in slots.into_iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO appointments (patient_id, doctor_id, hospital_id,
                appointment_date, time_slot, status, payment_status, symptoms, fee)
            VALUES ($1, $2, $3, $4, $5, $6::appointment_status, $7::payment_status,
                'Routine visit', 150.0)
            "#,
        )
        .bind(patient_ids[i % patient_ids.len()])
        .bind(doctor_ids[i % doctor_ids.len()])
        .bind(hospital_ids[i % hospital_ids.len()])
        .bind(date)
        .bind(slot)
        .bind(status)
        .bind(payment)
        .execute(pool)
        .await?;
    }

    println!("[done] Created 6 appointments");
    Ok(())
}
