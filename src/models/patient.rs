//! Patient profile model linked to a user account.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "gender")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Patient {
    pub id: Uuid,
    pub patient_code: String,
    pub user_id: Uuid,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub blood_group: Option<String>,
    pub address: serde_json::Value,
    pub emergency_contact: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Patient row joined with the owning user account for list/detail views.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PatientProfile {
    pub id: Uuid,
    pub patient_code: String,
    pub user_id: Uuid,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub blood_group: Option<String>,
    pub address: serde_json::Value,
    pub emergency_contact: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePatient {
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub blood_group: Option<String>,
    pub address: Option<serde_json::Value>,
    pub emergency_contact: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdatePatient {
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub blood_group: Option<String>,
    pub address: Option<serde_json::Value>,
    pub emergency_contact: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_round_trip() {
        let g = Gender::Female;
        let json = serde_json::to_string(&g).unwrap();
        let back: Gender = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Gender::Female);
    }

    #[test]
    fn create_patient_minimal_payload() {
        let input: CreatePatient = serde_json::from_str(
            r#"{"date_of_birth": "1990-05-15", "gender": "Male"}"#,
        )
        .unwrap();
        assert_eq!(input.gender, Gender::Male);
        assert!(input.blood_group.is_none());
    }
}
