use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::{class_registration::Model as ClassRegistration, gym_class::Model as GymClass};

use crate::response::ApiResponse;
use crate::routes::classes::common::ClassResponse;
use crate::state::AppState;

/// GET /api/classes
///
/// List every class, ascending by schedule. Public: the timetable is part
/// of the marketing site. Filtering happens client-side.
///
/// ### Responses
///
/// - `200 OK`: `data` is the full class list
/// - `500 Internal Server Error`: persistence failure
pub async fn list_classes(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    let classes = match GymClass::get_all_ordered(db).await {
        Ok(classes) => classes,
        Err(e) => {
            tracing::error!(error = %e, "Failed to list classes");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<ClassResponse>>::error("Database error")),
            );
        }
    };

    let ids: Vec<i64> = classes.iter().map(|c| c.id).collect();
    let mut members = match ClassRegistration::member_ids_for(db, &ids).await {
        Ok(members) => members,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load class registrations");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<ClassResponse>>::error("Database error")),
            );
        }
    };

    let response: Vec<ClassResponse> = classes
        .into_iter()
        .map(|class| {
            let registered = members.remove(&class.id).unwrap_or_default();
            ClassResponse::from_model(class, registered)
        })
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            response,
            "Classes retrieved successfully",
        )),
    )
}
