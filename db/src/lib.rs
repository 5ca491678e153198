pub mod models;
pub mod test_utils;

use common::Config;
use sea_orm::{Database, DatabaseConnection, DbErr};

/// Connects to the database configured via `DATABASE_URL`.
pub async fn connect() -> DatabaseConnection {
    let url = &Config::get().database_url;

    Database::connect(url)
        .await
        .expect("Failed to connect to database")
}

/// Returns true if `err` is a unique-constraint violation involving the
/// given index (e.g. `"membership_plans.name"`). SQLite reports these as
/// execution errors, so the constraint has to be matched by message.
pub fn is_unique_violation(err: &DbErr, constraint: &str) -> bool {
    let msg = err.to_string();
    msg.contains("UNIQUE constraint failed") && msg.contains(constraint)
}
