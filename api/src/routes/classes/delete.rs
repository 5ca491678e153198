use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{class_registration::Model as ClassRegistration, gym_class::Model as GymClass};

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;

/// DELETE /api/classes/{class_id}
///
/// Remove a class and its registrations. Deletion is immediate and
/// irreversible. Requires authentication.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": null,
///   "message": "Class removed"
/// }
/// ```
///
/// - `401 Unauthorized`: missing or invalid bearer token
/// - `404 Not Found`: unknown class
/// - `500 Internal Server Error`
pub async fn delete_class(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match GymClass::delete_by_id(db, class_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Class removed")),
        ),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Class not found")),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to delete class");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Database error")),
            )
        }
    }
}

/// DELETE /api/classes/{class_id}/register
///
/// Remove the authenticated member's registration for a class.
///
/// ### Responses
///
/// - `200 OK`: registration removed
/// - `404 Not Found`: unknown class
/// - `409 Conflict`: the member is not registered for this class
/// - `500 Internal Server Error`
pub async fn unregister_from_class(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> impl IntoResponse {
    let db = app_state.db();

    match GymClass::get_by_id(db, class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Class not found")),
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load class");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Database error")),
            );
        }
    }

    match ClassRegistration::unregister(db, class_id, claims.user.id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Registration removed")),
        ),
        Ok(false) => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<Empty>::error(
                "Not registered for this class",
            )),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to remove registration");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Database error")),
            )
        }
    }
}
