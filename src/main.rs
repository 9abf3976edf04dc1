mod catalog;
mod config;
mod logging;
mod routes;
mod services;
mod state;

/// Failures that keep the server from starting. Each exits with status 1.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("dependency missing: {0}")]
    DependencyMissing(String),
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // A missing .env is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    let config = config::AppConfig::from_env();

    // The log sink may not be installed yet, so report on stderr directly.
    if let Err(e) = run(config).await {
        eprintln!("assistant-demo: {e}");
        std::process::exit(1);
    }
}

async fn run(config: config::AppConfig) -> Result<(), StartupError> {
    logging::init(&config).map_err(|e| {
        StartupError::DependencyMissing(format!("log file {}: {e}", config.log_file.display()))
    })?;
    tracing::info!("starting assistant demo");

    let port = config.port;
    let state = state::AppState::new(config);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|e| StartupError::DependencyMissing(format!("bind 0.0.0.0:{port}: {e}")))?;

    tracing::info!(%port, "assistant demo listening");
    axum::serve(listener, app).await?;
    Ok(())
}
