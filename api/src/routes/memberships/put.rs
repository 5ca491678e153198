use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::format_validation_errors;
use db::models::membership_plan::{Features, Model as MembershipPlan};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, IntoActiveModel};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::memberships::common::{EditMembershipPlanRequest, MembershipPlanResponse};
use crate::state::AppState;

/// PUT /api/memberships/{plan_id}
///
/// Partially update a plan: absent fields keep their stored value. Admin
/// only. Renaming onto another plan's name is a conflict.
///
/// ### Responses
///
/// - `200 OK`: `data` is the updated plan
/// - `400 Bad Request`: a provided field fails validation
/// - `401 Unauthorized`: missing or invalid bearer token
/// - `403 Forbidden`: valid token without the admin role
/// - `404 Not Found`: unknown plan
/// - `409 Conflict`: name already used by another plan
/// - `500 Internal Server Error`
pub async fn edit_membership(
    State(app_state): State<AppState>,
    Path(plan_id): Path<i64>,
    Json(req): Json<EditMembershipPlanRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<MembershipPlanResponse>::error(error_message)),
        );
    }

    let db = app_state.db();

    let plan = match MembershipPlan::get_by_id(db, plan_id).await {
        Ok(Some(plan)) => plan,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<MembershipPlanResponse>::error(
                    "Membership plan not found",
                )),
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load membership plan");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<MembershipPlanResponse>::error("Database error")),
            );
        }
    };

    if let Some(name) = &req.name {
        match MembershipPlan::name_taken(db, name, Some(plan_id)).await {
            Ok(true) => {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<MembershipPlanResponse>::error(
                        "A membership plan with this name already exists",
                    )),
                );
            }
            Ok(false) => {}
            Err(e) => {
                tracing::error!(error = %e, "Failed to check plan name");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<MembershipPlanResponse>::error("Database error")),
                );
            }
        }
    }

    let mut updated = plan.into_active_model();
    if let Some(name) = &req.name {
        updated.name = Set(name.trim().to_owned());
    }
    if let Some(price) = req.price {
        updated.price = Set(price);
    }
    if let Some(original_price) = req.original_price {
        updated.original_price = Set(Some(original_price));
    }
    if let Some(duration) = req.duration {
        updated.duration = Set(duration);
    }
    if let Some(features) = req.features {
        updated.features = Set(Features(features));
    }
    if let Some(popular) = req.popular {
        updated.popular = Set(popular);
    }
    if let Some(theme) = req.theme {
        updated.theme = Set(theme);
    }

    match updated.update(db).await {
        Ok(plan) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                MembershipPlanResponse::from(plan),
                "Membership plan updated successfully",
            )),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to update membership plan");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<MembershipPlanResponse>::error("Database error")),
            )
        }
    }
}
