//! Doctor profile model with specialization and availability.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Doctor {
    pub id: Uuid,
    pub doctor_code: String,
    pub user_id: Uuid,
    pub specialization: String,
    pub qualification: String,
    pub experience: i32,
    pub license_number: String,
    pub department: String,
    pub consultation_fee: f64,
    /// Weekly availability slots: `[{day, startTime, endTime, isAvailable}]`.
    pub availability: serde_json::Value,
    pub rating: f64,
    pub total_patients: i32,
    pub biography: Option<String>,
    pub awards: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Doctor row joined with the owning user account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DoctorProfile {
    pub id: Uuid,
    pub doctor_code: String,
    pub user_id: Uuid,
    pub specialization: String,
    pub qualification: String,
    pub experience: i32,
    pub license_number: String,
    pub department: String,
    pub consultation_fee: f64,
    pub availability: serde_json::Value,
    pub rating: f64,
    pub total_patients: i32,
    pub biography: Option<String>,
    pub awards: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDoctor {
    pub user_id: Uuid,
    #[validate(length(min = 1))]
    pub specialization: String,
    #[validate(length(min = 1))]
    pub qualification: String,
    #[validate(range(min = 0))]
    pub experience: i32,
    #[validate(length(min = 1))]
    pub license_number: String,
    #[validate(length(min = 1))]
    pub department: String,
    #[validate(range(min = 0.0))]
    pub consultation_fee: f64,
    pub availability: Option<serde_json::Value>,
    pub biography: Option<String>,
    pub awards: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateDoctor {
    pub specialization: Option<String>,
    pub qualification: Option<String>,
    #[validate(range(min = 0))]
    pub experience: Option<i32>,
    pub department: Option<String>,
    #[validate(range(min = 0.0))]
    pub consultation_fee: Option<f64>,
    pub availability: Option<serde_json::Value>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
    #[validate(range(min = 0))]
    pub total_patients: Option<i32>,
    pub biography: Option<String>,
    pub awards: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_create() -> CreateDoctor {
        CreateDoctor {
            user_id: Uuid::nil(),
            specialization: "Cardiology".to_string(),
            qualification: "MBBS, MD".to_string(),
            experience: 12,
            license_number: "LIC-2024-0042".to_string(),
            department: "Cardiology".to_string(),
            consultation_fee: 150.0,
            availability: None,
            biography: None,
            awards: None,
        }
    }

    #[test]
    fn create_doctor_valid() {
        assert!(base_create().validate().is_ok());
    }

    #[test]
    fn create_doctor_rejects_negative_experience() {
        let mut input = base_create();
        input.experience = -1;
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_doctor_rejects_out_of_range_rating() {
        let update = UpdateDoctor {
            rating: Some(5.5),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
