//! User account model with role-based access control.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Doctor,
    Staff,
    Patient,
}

/// Full user row from database (includes password_hash — never serialize to API).
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User response DTO — excludes password_hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            full_name: u.full_name,
            phone: u.phone,
            role: u.role,
            is_active: u.is_active,
            created_at: u.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(length(min = 3, max = 64))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 1))]
    pub full_name: String,
    pub phone: Option<String>,
    pub role: UserRole,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_role_serializes_lowercase() {
        let role = UserRole::Staff;
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"staff\"");
    }

    #[test]
    fn user_response_excludes_password() {
        let json = serde_json::to_string(&UserResponse {
            id: Uuid::nil(),
            username: "admin".to_string(),
            email: "admin@caredesk.local".to_string(),
            full_name: "Administrator".to_string(),
            phone: None,
            role: UserRole::Admin,
            is_active: true,
            created_at: Utc::now(),
        })
        .unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("hash"));
    }

    #[test]
    fn register_user_rejects_short_password() {
        let input = RegisterUser {
            username: "newuser".to_string(),
            email: "new@caredesk.local".to_string(),
            password: "short".to_string(),
            full_name: "New User".to_string(),
            phone: None,
            role: UserRole::Patient,
        };
        assert!(input.validate().is_err());
    }
}
