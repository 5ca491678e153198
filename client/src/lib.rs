//! Typed client for the gym API plus the client-side session store.
//!
//! The server stays the sole authority for protected actions; this crate
//! only decodes token claims for local gating and attaches the bearer
//! token to outgoing requests.

pub mod api;
pub mod models;
pub mod session;
pub mod theme;

pub use api::{ApiClient, ClientError};
pub use session::{Session, SessionUser};
pub use theme::{ThemeDisplay, theme_display};
