//! Dashboard routes: aggregated statistics for the overview page.

use axum::{extract::State, Json};

use crate::errors::{ApiResponse, AppError};
use crate::middleware::rbac::RequireStaff;
use crate::services::dashboard::{self, DashboardStats};
use crate::AppState;

/// GET /api/dashboard/stats — aggregated dashboard statistics
/// (admin/doctor/staff).
pub async fn stats(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
) -> Result<Json<ApiResponse<DashboardStats>>, AppError> {
    let stats = dashboard::get_stats(&state.db).await?;
    Ok(ApiResponse::success(stats))
}
