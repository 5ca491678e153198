use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use common::format_validation_errors;
use db::models::{class_registration::Model as ClassRegistration, gym_class};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, IntoActiveModel};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::classes::common::{ClassResponse, EditClassRequest};
use crate::state::AppState;

/// PUT /api/classes/{class_id}
///
/// Partially update a class: absent fields keep their stored value, so
/// replaying the same payload is idempotent. Requires authentication.
///
/// ### Request Body
/// ```json
/// {
///   "instructor": "Dev Kapoor",
///   "capacity": 24
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK`: `data` is the updated class
/// - `400 Bad Request`: a provided field fails validation
/// - `401 Unauthorized`: missing or invalid bearer token
/// - `404 Not Found`: unknown class
/// - `500 Internal Server Error`
pub async fn edit_class(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
    Json(req): Json<EditClassRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<ClassResponse>::error(error_message)),
        );
    }

    let db = app_state.db();

    let class = match gym_class::Model::get_by_id(db, class_id).await {
        Ok(Some(class)) => class,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<ClassResponse>::error("Class not found")),
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load class");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ClassResponse>::error("Database error")),
            );
        }
    };

    let mut updated = class.into_active_model();
    if let Some(name) = &req.name {
        updated.name = Set(name.trim().to_owned());
    }
    if let Some(description) = &req.description {
        updated.description = Set(description.clone());
    }
    if let Some(instructor) = &req.instructor {
        updated.instructor = Set(instructor.clone());
    }
    if let Some(schedule) = req.schedule {
        updated.schedule = Set(schedule);
    }
    if let Some(capacity) = req.capacity {
        updated.capacity = Set(capacity);
    }
    updated.updated_at = Set(Utc::now());

    let class = match updated.update(db).await {
        Ok(class) => class,
        Err(e) => {
            tracing::error!(error = %e, "Failed to update class");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ClassResponse>::error("Database error")),
            );
        }
    };

    match ClassRegistration::member_ids(db, class_id).await {
        Ok(members) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ClassResponse::from_model(class, members),
                "Class updated successfully",
            )),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load class registrations");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ClassResponse>::error("Database error")),
            )
        }
    }
}
