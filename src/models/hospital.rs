//! Hospital model with departments and bed capacity.
//!
//! Bed counters are manually maintained fields edited through updates; they
//! are not derived from appointment or admission records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "hospital_type")]
pub enum HospitalType {
    Government,
    Private,
    #[sqlx(rename = "Semi-Government")]
    #[serde(rename = "Semi-Government")]
    SemiGovernment,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Hospital {
    pub id: Uuid,
    pub hospital_code: String,
    pub name: String,
    pub address: serde_json::Value,
    pub phone: String,
    pub email: String,
    pub hospital_type: HospitalType,
    /// Departments: `[{name, headOfDepartment, totalBeds, occupiedBeds}]`.
    pub departments: serde_json::Value,
    pub facilities: serde_json::Value,
    pub total_beds: i32,
    pub available_beds: i32,
    pub emergency_services: bool,
    pub accreditation: Option<String>,
    pub website: Option<String>,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHospital {
    #[validate(length(min = 1))]
    pub name: String,
    pub address: Option<serde_json::Value>,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(email)]
    pub email: String,
    pub hospital_type: HospitalType,
    pub departments: Option<serde_json::Value>,
    pub facilities: Option<Vec<String>>,
    #[validate(range(min = 0))]
    pub total_beds: i32,
    #[validate(range(min = 0))]
    pub available_beds: i32,
    pub emergency_services: Option<bool>,
    pub accreditation: Option<String>,
    pub website: Option<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateHospital {
    pub name: Option<String>,
    pub address: Option<serde_json::Value>,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub hospital_type: Option<HospitalType>,
    pub departments: Option<serde_json::Value>,
    pub facilities: Option<Vec<String>>,
    #[validate(range(min = 0))]
    pub total_beds: Option<i32>,
    #[validate(range(min = 0))]
    pub available_beds: Option<i32>,
    pub emergency_services: Option<bool>,
    pub accreditation: Option<String>,
    pub website: Option<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hospital_type_serializes_with_hyphen() {
        let t = HospitalType::SemiGovernment;
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"Semi-Government\"");
    }

    #[test]
    fn create_hospital_rejects_negative_beds() {
        let input = CreateHospital {
            name: "City General".to_string(),
            address: None,
            phone: "555-0100".to_string(),
            email: "info@citygeneral.test".to_string(),
            hospital_type: HospitalType::Government,
            departments: None,
            facilities: None,
            total_beds: -5,
            available_beds: 0,
            emergency_services: None,
            accreditation: None,
            website: None,
            rating: None,
        };
        assert!(input.validate().is_err());
    }
}
