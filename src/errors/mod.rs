//! Unified error handling with the API response envelope.
//!
//! Every successful response is `{ "success": true, "data": ..., "count"?: N }`
//! and every error response is `{ "success": false, "message": "..." }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Consistent JSON envelope for all API responses.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a successful result in the envelope.
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            count: None,
            message: None,
        })
    }

    /// Wrap a successful list result, attaching the item count.
    pub fn success_with_count(data: T, count: usize) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            count: Some(count),
            message: None,
        })
    }

    /// Success acknowledgement with a message and no data payload.
    pub fn message(message: &str) -> Json<Self> {
        Json(Self {
            success: true,
            data: None,
            count: None,
            message: Some(message.to_string()),
        })
    }
}

/// Application error type mapping to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Check if this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Generic server-error message; in debug builds the detail is appended
/// so local development keeps the original Express-style error echo.
fn server_error_message(detail: &str) -> String {
    if cfg!(debug_assertions) {
        format!("Server error: {detail}")
    } else {
        "Server error".to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Not authorized to access this route".to_string(),
            ),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    server_error_message(&e.to_string()),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, server_error_message(msg))
            }
        };

        let body = ApiResponse::<()> {
            success: false,
            data: None,
            count: None,
            message: Some(message),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_response_success() {
        let response = ApiResponse::success("hello");
        let json = serde_json::to_value(&response.0).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "hello");
        assert!(json.get("count").is_none());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn api_response_list_carries_count() {
        let response = ApiResponse::success_with_count(vec![1, 2, 3], 3);
        let json = serde_json::to_value(&response.0).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 3);
    }

    #[test]
    fn api_response_message_only() {
        let response = ApiResponse::<()>::message("Patient deleted successfully");
        let json = serde_json::to_value(&response.0).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Patient deleted successfully");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn app_error_is_not_found() {
        let err = AppError::NotFound("Patient not found".to_string());
        assert!(err.is_not_found());
    }

    #[test]
    fn app_error_display() {
        let err = AppError::Validation("totalBeds must be non-negative".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: totalBeds must be non-negative"
        );
    }

    #[test]
    fn app_error_from_sqlx() {
        let sqlx_err = sqlx::Error::RowNotFound;
        let err: AppError = sqlx_err.into();
        assert!(matches!(err, AppError::Database(_)));
    }
}
