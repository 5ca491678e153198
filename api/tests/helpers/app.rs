use api::routes::routes;
use api::state::AppState;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::Request,
};
use common::Config;
use serde_json::Value;

/// Builds a fully wired router backed by a fresh in-memory database.
/// Returns the app state as well so tests can seed data directly.
pub async fn make_test_app() -> (Router, AppState) {
    Config::init_for_tests();

    let db = db::test_utils::setup_test_db().await;
    let app_state = AppState::new(db);

    let router = Router::new().nest("/api", routes(app_state.clone()));
    (router, app_state)
}

pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<&Value>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");

    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let body = match body {
        Some(value) => Body::from(serde_json::to_vec(value).unwrap()),
        None => Body::empty(),
    };

    builder.body(body).unwrap()
}

pub async fn response_json(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}
