use crate::auth::guards::allow_authenticated;
use crate::state::AppState;
use axum::middleware::from_fn;
use axum::routing::{delete, get, post, put};
use axum::Router;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::{delete_class, unregister_from_class};
use get::list_classes;
use post::{create_class, register_for_class};
use put::edit_class;

pub fn class_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_classes))
        .route(
            "/",
            post(create_class).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{class_id}",
            put(edit_class).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{class_id}",
            delete(delete_class).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{class_id}/register",
            post(register_for_class).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{class_id}/register",
            delete(unregister_from_class).route_layer(from_fn(allow_authenticated)),
        )
}
