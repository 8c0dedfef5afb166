//! Appointment model linking patient, doctor, and hospital.
//!
//! The `patient_id` / `doctor_id` / `hospital_id` columns are intentionally
//! not foreign-key constrained: deleting a referenced entity must succeed
//! and leaves the reference dangling. Joined views therefore carry the
//! related display fields as `Option`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "appointment_type")]
pub enum AppointmentType {
    Consultation,
    #[sqlx(rename = "Follow-up")]
    #[serde(rename = "Follow-up")]
    FollowUp,
    Emergency,
    #[sqlx(rename = "Routine Checkup")]
    #[serde(rename = "Routine Checkup")]
    RoutineCheckup,
}

/// Closed status enum; any status may be set to any other via update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "appointment_status")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    #[sqlx(rename = "No-Show")]
    #[serde(rename = "No-Show")]
    NoShow,
    #[sqlx(rename = "In-Progress")]
    #[serde(rename = "In-Progress")]
    InProgress,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "payment_status")]
pub enum PaymentStatus {
    Pending,
    Paid,
    #[sqlx(rename = "Partially Paid")]
    #[serde(rename = "Partially Paid")]
    PartiallyPaid,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    pub id: Uuid,
    pub appointment_code: String,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub hospital_id: Uuid,
    pub appointment_date: DateTime<Utc>,
    pub time_slot: String,
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    pub symptoms: Option<String>,
    pub diagnosis: Option<String>,
    /// Prescription lines: `[{medicine, dosage, duration, instructions}]`.
    pub prescription: serde_json::Value,
    pub notes: Option<String>,
    pub fee: Option<f64>,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Appointment joined with the display identifiers of its related entities.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AppointmentView {
    pub id: Uuid,
    pub appointment_code: String,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub hospital_id: Uuid,
    pub appointment_date: DateTime<Utc>,
    pub time_slot: String,
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    pub symptoms: Option<String>,
    pub diagnosis: Option<String>,
    pub prescription: serde_json::Value,
    pub notes: Option<String>,
    pub fee: Option<f64>,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub patient_code: Option<String>,
    pub doctor_code: Option<String>,
    pub hospital_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAppointment {
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub hospital_id: Uuid,
    pub appointment_date: DateTime<Utc>,
    #[validate(length(min = 1))]
    pub time_slot: String,
    pub appointment_type: Option<AppointmentType>,
    pub symptoms: Option<String>,
    #[validate(range(min = 0.0))]
    pub fee: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateAppointment {
    pub appointment_date: Option<DateTime<Utc>>,
    pub time_slot: Option<String>,
    pub appointment_type: Option<AppointmentType>,
    pub status: Option<AppointmentStatus>,
    pub symptoms: Option<String>,
    pub diagnosis: Option<String>,
    pub prescription: Option<serde_json::Value>,
    pub notes: Option<String>,
    #[validate(range(min = 0.0))]
    pub fee: Option<f64>,
    pub payment_status: Option<PaymentStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_with_hyphen() {
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::NoShow).unwrap(),
            "\"No-Show\""
        );
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::InProgress).unwrap(),
            "\"In-Progress\""
        );
    }

    #[test]
    fn status_round_trip() {
        for status in [
            AppointmentStatus::Scheduled,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
            AppointmentStatus::NoShow,
            AppointmentStatus::InProgress,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let back: AppointmentStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn payment_status_partially_paid_label() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::PartiallyPaid).unwrap(),
            "\"Partially Paid\""
        );
    }

    #[test]
    fn create_appointment_rejects_negative_fee() {
        let input = CreateAppointment {
            patient_id: Uuid::nil(),
            doctor_id: Uuid::nil(),
            hospital_id: Uuid::nil(),
            appointment_date: Utc::now(),
            time_slot: "10:00-10:30".to_string(),
            appointment_type: None,
            symptoms: None,
            fee: Some(-10.0),
        };
        assert!(input.validate().is_err());
    }
}
