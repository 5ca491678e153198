use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::{env, fs};

/// Runtime configuration, loaded once from a dotenv file plus the process
/// environment. `DATABASE_URL` and `JWT_SECRET` are required; everything
/// else has a sensible default.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_duration_minutes: u64,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();

        CONFIG.get_or_init(|| {
            let project_name = env::var("PROJECT_NAME").unwrap_or_else(|_| "gym-api".into());
            let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info".into());
            let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into());
            let log_to_stdout =
                env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true";
            let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
            let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());
            let port = env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001);

            if let Some(parent) = std::path::Path::new(&log_file).parent() {
                fs::create_dir_all(parent).expect("Failed to create log directory");
            }
            let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
            let jwt_duration_minutes = env::var("JWT_DURATION_MINUTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or(60);

            Config {
                project_name,
                log_level,
                log_file,
                log_to_stdout,
                database_url,
                host,
                port,
                jwt_secret,
                jwt_duration_minutes,
            }
        })
    }

    /// Fixed configuration for the test suites. Avoids mutating the process
    /// environment, which is racy under the parallel test runner.
    pub fn init_for_tests() -> &'static Self {
        CONFIG.get_or_init(|| Config {
            project_name: "gym-api".into(),
            log_level: "api=debug".into(),
            log_file: "test.log".into(),
            log_to_stdout: false,
            database_url: "sqlite::memory:".into(),
            host: "127.0.0.1".into(),
            port: 0,
            jwt_secret: "test_secret_key_for_jwt_generation_and_validation".into(),
            jwt_duration_minutes: 60,
        })
    }

    pub fn get() -> &'static Self {
        CONFIG.get().expect("Config not initialized")
    }
}
