// File: services/freeslot_backend/src/main.rs
use freeslot_common::{config_error, logging, Context};
use freeslot_config::load_config;
use std::error::Error;
use std::process::ExitCode;
use tokio::net::TcpListener;
use tracing::{error, info};

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

async fn run() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = load_config().map_err(config_error)?;

    // Authenticate once; every request shares the same hub
    let gcal_state = freeslot_gcal::build_state(&config.gcal).await?;
    let app = freeslot_backend::app(gcal_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {}", addr))?;
    info!("Starting server at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logging::log_error(err, "Server failed");
            ExitCode::FAILURE
        }
    }
}
