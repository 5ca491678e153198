mod helpers;

use api::auth::generate_jwt;
use axum::http::StatusCode;
use db::models::membership_plan::{Model as PlanModel, PlanDuration, PlanTheme};
use db::models::user::{Model as UserModel, Role};
use helpers::app::{json_request, make_test_app, response_json};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;
use tower::ServiceExt;

struct TestData {
    admin_token: String,
    member_token: String,
}

async fn setup_test_data(app_state: &api::state::AppState) -> TestData {
    let admin = UserModel::create(
        app_state.db(),
        "Admin",
        "admin@example.com",
        "password123",
        Role::Admin,
    )
    .await
    .unwrap();
    let member = UserModel::create(
        app_state.db(),
        "Member",
        "member@example.com",
        "password123",
        Role::User,
    )
    .await
    .unwrap();

    let (admin_token, _) = generate_jwt(admin.id, admin.role);
    let (member_token, _) = generate_jwt(member.id, member.role);
    TestData {
        admin_token,
        member_token,
    }
}

async fn seed_plan(app_state: &api::state::AppState, name: &str, price: f64) -> PlanModel {
    PlanModel::create(
        app_state.db(),
        name,
        price,
        None,
        PlanDuration::Monthly,
        vec!["Gym floor access".into()],
        false,
        PlanTheme::Starter,
    )
    .await
    .unwrap()
}

/// Test Case: Listing is public and ordered ascending by price
#[tokio::test]
async fn test_list_memberships_public_and_ordered() {
    let (app, app_state) = make_test_app().await;

    let pro = seed_plan(&app_state, "Pro", 149.0).await;
    let basic = seed_plan(&app_state, "Basic", 29.0).await;

    // No Authorization header at all.
    let response = app
        .oneshot(json_request("GET", "/api/memberships", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["success"], true);
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"].as_i64(), Some(basic.id));
    assert_eq!(data[1]["id"].as_i64(), Some(pro.id));
}

/// Test Case: Fetching one plan is public; unknown ids are 404
#[tokio::test]
async fn test_get_membership() {
    let (app, app_state) = make_test_app().await;

    let plan = seed_plan(&app_state, "Basic", 29.0).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "GET",
            &format!("/api/memberships/{}", plan.id),
            None,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["data"]["name"], "Basic");
    assert_eq!(json["data"]["duration"], "monthly");
    assert_eq!(json["data"]["theme"], "starter");

    let response = app
        .oneshot(json_request("GET", "/api/memberships/9999", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Test Case: Writes demand a token, then the admin role, in that order
#[tokio::test]
async fn test_create_membership_authorization() {
    let (app, app_state) = make_test_app().await;
    let data = setup_test_data(&app_state).await;

    let req_body = json!({
        "name": "Pro",
        "price": 149.0,
        "duration": "quarterly"
    });

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/memberships", None, Some(&req_body)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // A valid non-admin token is forbidden, never 404 or 500.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/memberships",
            Some(&data.member_token),
            Some(&req_body),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = response_json(response).await;
    assert_eq!(json["message"], "Admin access required");

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/memberships",
            Some(&data.admin_token),
            Some(&req_body),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Test Case: Created plan echoes its input, with defaults applied
#[tokio::test]
async fn test_create_membership_success() {
    let (app, app_state) = make_test_app().await;
    let data = setup_test_data(&app_state).await;

    let req_body = json!({
        "name": "Pro",
        "price": 149.0,
        "original_price": 179.0,
        "duration": "quarterly",
        "features": ["Unlimited group classes", "Sauna"],
        "popular": true,
        "theme": "performance"
    });
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/memberships",
            Some(&data.admin_token),
            Some(&req_body),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = response_json(response).await;
    assert_eq!(json["message"], "Membership plan created successfully");
    let plan = &json["data"];
    assert_eq!(plan["name"], "Pro");
    assert_eq!(plan["price"], 149.0);
    assert_eq!(plan["original_price"], 179.0);
    assert_eq!(plan["duration"], "quarterly");
    assert_eq!(plan["features"], json!(["Unlimited group classes", "Sauna"]));
    assert_eq!(plan["popular"], true);
    assert_eq!(plan["theme"], "performance");
}

/// Test Case: Duplicate plan name is a conflict and creates nothing
#[tokio::test]
async fn test_create_membership_duplicate_name() {
    let (app, app_state) = make_test_app().await;
    let data = setup_test_data(&app_state).await;

    seed_plan(&app_state, "Basic", 29.0).await;

    let req_body = json!({
        "name": "Basic",
        "price": 39.0,
        "duration": "monthly"
    });
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/memberships",
            Some(&data.admin_token),
            Some(&req_body),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = response_json(response).await;
    assert_eq!(
        json["message"],
        "A membership plan with this name already exists"
    );

    let count = db::models::membership_plan::Entity::find()
        .count(app_state.db())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

/// Test Case: Invalid create payloads are client errors
#[tokio::test]
async fn test_create_membership_validation() {
    let (app, app_state) = make_test_app().await;
    let data = setup_test_data(&app_state).await;

    // Negative price fails validation.
    let req_body = json!({"name": "Cheap", "price": -1.0, "duration": "monthly"});
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/memberships",
            Some(&data.admin_token),
            Some(&req_body),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // An unknown duration never reaches the handler.
    let req_body = json!({"name": "Odd", "price": 10.0, "duration": "fortnightly"});
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/memberships",
            Some(&data.admin_token),
            Some(&req_body),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

/// Test Case: Partial updates re-validate and respect name uniqueness
#[tokio::test]
async fn test_edit_membership() {
    let (app, app_state) = make_test_app().await;
    let data = setup_test_data(&app_state).await;

    let basic = seed_plan(&app_state, "Basic", 29.0).await;
    seed_plan(&app_state, "Pro", 149.0).await;

    // Partial update keeps untouched fields.
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/memberships/{}", basic.id),
            Some(&data.admin_token),
            Some(&json!({"price": 35.0, "popular": true})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["data"]["name"], "Basic");
    assert_eq!(json["data"]["price"], 35.0);
    assert_eq!(json["data"]["popular"], true);

    // Renaming onto another plan's name is a conflict.
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/memberships/{}", basic.id),
            Some(&data.admin_token),
            Some(&json!({"name": "Pro"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Unknown plan is a 404.
    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/memberships/9999",
            Some(&data.admin_token),
            Some(&json!({"price": 1.0})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Test Case: Non-admin delete is forbidden and removes nothing
#[tokio::test]
async fn test_delete_membership_forbidden_for_member() {
    let (app, app_state) = make_test_app().await;
    let data = setup_test_data(&app_state).await;

    let plan = seed_plan(&app_state, "Basic", 29.0).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/api/memberships/{}", plan.id),
            Some(&data.member_token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Document still present on a subsequent GET.
    let response = app
        .oneshot(json_request(
            "GET",
            &format!("/api/memberships/{}", plan.id),
            None,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

/// Test Case: Admin delete removes the plan; unknown ids are 404
#[tokio::test]
async fn test_delete_membership_as_admin() {
    let (app, app_state) = make_test_app().await;
    let data = setup_test_data(&app_state).await;

    let plan = seed_plan(&app_state, "Basic", 29.0).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            "/api/memberships/9999",
            Some(&data.admin_token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/api/memberships/{}", plan.id),
            Some(&data.admin_token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["message"], "Membership plan removed");

    let count = db::models::membership_plan::Entity::find()
        .count(app_state.db())
        .await
        .unwrap();
    assert_eq!(count, 0);
}
