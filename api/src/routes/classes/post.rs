use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::format_validation_errors;
use db::models::{class_registration::Model as ClassRegistration, gym_class::Model as GymClass};
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::classes::common::{ClassRequest, ClassResponse};
use crate::state::AppState;

/// POST /api/classes
///
/// Create a class. Requires authentication.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Power Yoga",
///   "description": "Strength-focused vinyasa flow",
///   "instructor": "Maya Rao",
///   "schedule": "2026-08-12T09:00:00Z",
///   "capacity": 20
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created`: `data` is the created class
/// - `400 Bad Request`: missing/blank field or negative capacity
/// - `401 Unauthorized`: missing or invalid bearer token
/// - `500 Internal Server Error`
pub async fn create_class(
    State(app_state): State<AppState>,
    Json(req): Json<ClassRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<ClassResponse>::error(error_message)),
        );
    }

    let db = app_state.db();

    match GymClass::create(
        db,
        &req.name,
        &req.description,
        &req.instructor,
        req.schedule,
        req.capacity,
    )
    .await
    {
        Ok(class) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                ClassResponse::from_model(class, Vec::new()),
                "Class created successfully",
            )),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create class");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ClassResponse>::error("Database error")),
            )
        }
    }
}

/// POST /api/classes/{class_id}/register
///
/// Sign the authenticated member up for a class. Capacity is advisory and
/// not enforced here; only duplicate sign-ups are rejected.
///
/// ### Responses
///
/// - `200 OK`: `data` is the class with the updated member list
/// - `404 Not Found`: unknown class
/// - `409 Conflict`: already registered
/// - `500 Internal Server Error`
pub async fn register_for_class(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> impl IntoResponse {
    let db = app_state.db();
    let user_id = claims.user.id;

    let class = match GymClass::get_by_id(db, class_id).await {
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

    match ClassRegistration::is_registered(db, class_id, user_id).await {
        Ok(true) => {
            return (
                StatusCode::CONFLICT,
                Json(ApiResponse::<ClassResponse>::error(
                    "Already registered for this class",
                )),
            );
        }
        Ok(false) => {}
        Err(e) => {
            tracing::error!(error = %e, "Failed to check registration");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ClassResponse>::error("Database error")),
            );
        }
    }

    if let Err(e) = ClassRegistration::register(db, class_id, user_id).await {
        // Lost the race with a concurrent duplicate sign-up.
        if db::is_unique_violation(&e, "class_registrations") {
            return (
                StatusCode::CONFLICT,
                Json(ApiResponse::<ClassResponse>::error(
                    "Already registered for this class",
                )),
            );
        }
        tracing::error!(error = %e, "Failed to register for class");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<ClassResponse>::error("Database error")),
        );
    }

    match ClassRegistration::member_ids(db, class_id).await {
        Ok(members) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ClassResponse::from_model(class, members),
                "Registered for class",
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
