//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → health check (public)
//! - `/auth` → register and login (public)
//! - `/classes` → class catalogue; reads public, writes authenticated
//! - `/memberships` → plan catalogue; reads public, writes admin-only

use crate::routes::{
    auth::auth_routes, classes::class_routes, health::health_routes,
    memberships::membership_routes,
};
use crate::state::AppState;
use axum::Router;

pub mod auth;
pub mod classes;
pub mod health;
pub mod memberships;

/// Builds the complete application router for all HTTP endpoints.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest("/classes", class_routes())
        .nest("/memberships", membership_routes())
        .with_state(app_state)
}
