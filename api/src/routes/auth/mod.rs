//! # auth Routes Module
//!
//! Defines and wires up routes for the `/auth` endpoint group.
//!
//! - `POST /auth/register` → `register`
//! - `POST /auth/login` → `login`

pub mod post;

use crate::state::AppState;
use axum::{Router, routing::post};

use post::{login, register};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}
