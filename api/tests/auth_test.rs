mod helpers;

use api::auth::Claims;
use axum::http::StatusCode;
use common::Config;
use db::models::user::{Model as UserModel, Role};
use helpers::app::{json_request, make_test_app, response_json};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;
use tower::ServiceExt;

fn decode_claims(token: &str) -> Claims {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(Config::get().jwt_secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .expect("token should verify against the configured secret")
    .claims
}

/// Test Case: Successful registration issues a token with the `user` role
#[tokio::test]
async fn test_register_success() {
    let (app, _app_state) = make_test_app().await;

    let req_body = json!({
        "name": "Asha Verma",
        "email": "asha@example.com",
        "password": "strongpassword"
    });
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            None,
            Some(&req_body),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = response_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "User registered successfully");
    let data = &json["data"];
    assert_eq!(data["name"], "Asha Verma");
    assert_eq!(data["email"], "asha@example.com");
    assert_eq!(data["role"], "user");

    let claims = decode_claims(data["token"].as_str().unwrap());
    assert_eq!(claims.user.id, data["id"].as_i64().unwrap());
    assert_eq!(claims.user.role, Role::User);
    assert!(claims.exp > claims.iat);
}

/// Test Case: Duplicate email is a conflict and creates no extra account
#[tokio::test]
async fn test_register_duplicate_email() {
    let (app, app_state) = make_test_app().await;

    UserModel::create(
        app_state.db(),
        "First",
        "taken@example.com",
        "password123",
        Role::User,
    )
    .await
    .unwrap();

    let req_body = json!({
        "name": "Second",
        "email": "taken@example.com",
        "password": "password456"
    });
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            None,
            Some(&req_body),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = response_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "An account with this email already exists");

    let count = db::models::user::Entity::find()
        .count(app_state.db())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

/// Test Case: Invalid registration input is a validation failure, not 500
#[tokio::test]
async fn test_register_validation_errors() {
    let (app, _app_state) = make_test_app().await;

    let req_body = json!({
        "name": "Asha",
        "email": "not-an-email",
        "password": "short"
    });
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            None,
            Some(&req_body),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["success"], false);
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("Invalid email format"));
    assert!(message.contains("Password must be at least 8 characters"));
}

/// Test Case: Login returns a token whose role matches the stored account
#[tokio::test]
async fn test_login_success() {
    let (app, app_state) = make_test_app().await;

    let user = UserModel::create(app_state.db(), "A", "a@x.com", "secretpass", Role::Admin)
        .await
        .unwrap();

    let req_body = json!({"email": "a@x.com", "password": "secretpass"});
    let response = app
        .oneshot(json_request("POST", "/api/auth/login", None, Some(&req_body)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Login successful");

    let claims = decode_claims(json["data"]["token"].as_str().unwrap());
    assert_eq!(claims.user.id, user.id);
    assert_eq!(claims.user.role, Role::Admin);
}

/// Test Case: Unknown email and wrong password are indistinguishable
#[tokio::test]
async fn test_login_failures_are_identical() {
    let (app, app_state) = make_test_app().await;

    UserModel::create(app_state.db(), "A", "a@x.com", "secretpass", Role::User)
        .await
        .unwrap();

    let wrong_password = json!({"email": "a@x.com", "password": "wrongpass"});
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            Some(&wrong_password),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let wrong_password_json = response_json(response).await;

    let unknown_email = json!({"email": "ghost@x.com", "password": "secretpass"});
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            Some(&unknown_email),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let unknown_email_json = response_json(response).await;

    assert_eq!(wrong_password_json["message"], unknown_email_json["message"]);
    assert_eq!(wrong_password_json["message"], "Invalid email or password");
}
