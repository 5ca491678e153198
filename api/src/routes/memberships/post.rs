use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use db::models::membership_plan::Model as MembershipPlan;
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::memberships::common::{MembershipPlanRequest, MembershipPlanResponse};
use crate::state::AppState;

/// POST /api/memberships
///
/// Create a membership plan. Admin only. Plan names are unique; a
/// duplicate is a conflict, not a validation or server error.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Pro",
///   "price": 149.0,
///   "original_price": 179.0,
///   "duration": "quarterly",
///   "features": ["Unlimited group classes", "Sauna"],
///   "popular": true,
///   "theme": "performance"
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created`: `data` is the created plan
/// - `400 Bad Request`: validation failure
/// - `401 Unauthorized`: missing or invalid bearer token
/// - `403 Forbidden`: valid token without the admin role
/// - `409 Conflict`: a plan with this name already exists
/// - `500 Internal Server Error`
pub async fn create_membership(
    State(app_state): State<AppState>,
    Json(req): Json<MembershipPlanRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<MembershipPlanResponse>::error(error_message)),
        );
    }

    let db = app_state.db();

    match MembershipPlan::create(
        db,
        &req.name,
        req.price,
        req.original_price,
        req.duration,
        req.features,
        req.popular,
        req.theme,
    )
    .await
    {
        Ok(plan) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                MembershipPlanResponse::from(plan),
                "Membership plan created successfully",
            )),
        ),
        Err(e) if db::is_unique_violation(&e, "membership_plans.name") => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<MembershipPlanResponse>::error(
                "A membership plan with this name already exists",
            )),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create membership plan");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<MembershipPlanResponse>::error("Database error")),
            )
        }
    }
}
