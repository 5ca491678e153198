use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use db::models::user::{Model as User, Role};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::generate_jwt;
use crate::response::ApiResponse;
use crate::state::AppState;

static NON_BLANK_REGEX: Lazy<regex::Regex> = Lazy::new(|| regex::Regex::new(r"\S").unwrap());

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        regex(path = *NON_BLANK_REGEX, message = "Name is required"),
        length(max = 100, message = "Name must be at most 100 characters")
    )]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Serialize, Default)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
    pub expires_at: String,
}

impl UserResponse {
    fn from_user(user: User, token: String, expires_at: String) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            token,
            expires_at,
        }
    }
}

/// POST /auth/register
///
/// Register a new account. Every self-registered account gets the `user`
/// role; admins are provisioned out of band.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Asha Verma",
///   "email": "asha@example.com",
///   "password": "strongpassword"
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "name": "Asha Verma",
///     "email": "asha@example.com",
///     "role": "user",
///     "token": "jwt_token_here",
///     "expires_at": "2026-08-06T11:00:00Z"
///   },
///   "message": "User registered successfully"
/// }
/// ```
///
/// - `400 Bad Request` (validation failure)
/// - `409 Conflict` (duplicate email)
/// - `500 Internal Server Error`
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<UserResponse>::error(error_message)),
        );
    }

    let db = app_state.db();

    match User::create(db, &req.name, &req.email, &req.password, Role::User).await {
        Ok(user) => {
            let (token, expiry) = generate_jwt(user.id, user.role);
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    UserResponse::from_user(user, token, expiry),
                    "User registered successfully",
                )),
            )
        }
        Err(e) if db::is_unique_violation(&e, "users.email") => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<UserResponse>::error(
                "An account with this email already exists",
            )),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to register user");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<UserResponse>::error("Database error")),
            )
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// POST /auth/login
///
/// Authenticate an existing account and issue a JWT. Unknown email and
/// wrong password produce the identical response so the endpoint cannot be
/// used to probe which addresses have accounts.
///
/// ### Request Body
/// ```json
/// {
///   "email": "asha@example.com",
///   "password": "strongpassword"
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK`: same body shape as a successful registration
/// - `400 Bad Request` (validation failure)
/// - `401 Unauthorized` (invalid credentials)
/// - `500 Internal Server Error`
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<UserResponse>::error(error_message)),
        );
    }

    let db = app_state.db();

    match User::verify_credentials(db, &req.email, &req.password).await {
        Ok(Some(user)) => {
            let (token, expiry) = generate_jwt(user.id, user.role);
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    UserResponse::from_user(user, token, expiry),
                    "Login successful",
                )),
            )
        }
        Ok(None) => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<UserResponse>::error("Invalid email or password")),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to verify credentials");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<UserResponse>::error("Database error")),
            )
        }
    }
}
