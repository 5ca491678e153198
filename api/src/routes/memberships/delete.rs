use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::membership_plan::Model as MembershipPlan;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;

/// DELETE /api/memberships/{plan_id}
///
/// Remove a plan. Admin only; deletion is immediate and irreversible.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": null,
///   "message": "Membership plan removed"
/// }
/// ```
///
/// - `401 Unauthorized`: missing or invalid bearer token
/// - `403 Forbidden`: valid token without the admin role
/// - `404 Not Found`: unknown plan
/// - `500 Internal Server Error`
pub async fn delete_membership(
    State(app_state): State<AppState>,
    Path(plan_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match MembershipPlan::delete_by_id(db, plan_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Membership plan removed")),
        ),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Membership plan not found")),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to delete membership plan");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Database error")),
            )
        }
    }
}
