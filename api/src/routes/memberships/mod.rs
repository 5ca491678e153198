use crate::auth::guards::allow_admin;
use crate::state::AppState;
use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{delete, get, post, put};

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_membership;
use get::{get_membership, list_memberships};
use post::create_membership;
use put::edit_membership;

/// Reads are public; every write requires the `admin` role.
pub fn membership_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_memberships))
        .route("/{plan_id}", get(get_membership))
        .route(
            "/",
            post(create_membership).route_layer(from_fn(allow_admin)),
        )
        .route(
            "/{plan_id}",
            put(edit_membership).route_layer(from_fn(allow_admin)),
        )
        .route(
            "/{plan_id}",
            delete(delete_membership).route_layer(from_fn(allow_admin)),
        )
}
