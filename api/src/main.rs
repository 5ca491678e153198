use api::auth::middleware::log_request;
use api::routes::routes;
use api::state::AppState;
use axum::{Router, middleware::from_fn};
use common::Config;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing_appender::rolling;

#[tokio::main]
async fn main() {
    let config = Config::init(".env");
    let _log_guard = init_logging(&config.log_file, config.log_to_stdout);
    install_panic_hook();

    let db = db::connect().await;
    let app_state = AppState::new(db);

    let cors = CorsLayer::very_permissive();

    let app = Router::new()
        .nest("/api", routes(app_state))
        .layer(from_fn(log_request))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid address");

    println!(
        "Starting {} on http://{}:{}",
        config.project_name, config.host, config.port
    );

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server crashed");
}

fn init_logging(log_file: &str, log_to_stdout: bool) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true);

    let env_filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("api=info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if log_to_stdout {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}

/// Any panic means in-memory state can no longer be trusted; log it and
/// exit non-zero so the supervising process restarts a clean instance.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("Unrecoverable panic, shutting down: {info}");
        default_hook(info);
        std::process::exit(1);
    }));
}
