use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::membership_plan::Model as MembershipPlan;

use crate::response::ApiResponse;
use crate::routes::memberships::common::MembershipPlanResponse;
use crate::state::AppState;

/// GET /api/memberships
///
/// List every plan, cheapest first. Public regardless of account state.
pub async fn list_memberships(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    match MembershipPlan::get_all_ordered(db).await {
        Ok(plans) => {
            let response: Vec<MembershipPlanResponse> =
                plans.into_iter().map(MembershipPlanResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    response,
                    "Membership plans retrieved successfully",
                )),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to list membership plans");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<MembershipPlanResponse>>::error(
                    "Database error",
                )),
            )
        }
    }
}

/// GET /api/memberships/{plan_id}
///
/// Fetch a single plan. Public.
///
/// ### Responses
///
/// - `200 OK`: `data` is the plan
/// - `404 Not Found`: unknown plan
/// - `500 Internal Server Error`
pub async fn get_membership(
    State(app_state): State<AppState>,
    Path(plan_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match MembershipPlan::get_by_id(db, plan_id).await {
        Ok(Some(plan)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                MembershipPlanResponse::from(plan),
                "Membership plan retrieved successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<MembershipPlanResponse>::error(
                "Membership plan not found",
            )),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load membership plan");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<MembershipPlanResponse>::error("Database error")),
            )
        }
    }
}
