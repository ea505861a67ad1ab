use std::process::ExitCode;
use std::time::Duration;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use station_server::config::{ConfigError, ServerConfig};
use station_server::stations::{StationError, StationStore};
use station_server::web::{AppState, create_router};

/// Errors that stop the server from starting.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load stations: {0}")]
    Stations(#[from] StationError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    // Load stations (fail fast if the file is missing or malformed)
    let stations = StationStore::load(&config.stations_path).await?;
    info!(count = stations.len().await, "station directory ready");

    if let Some(interval) = config.reload_interval {
        spawn_reload(stations.clone(), interval);
    }

    let state = AppState::new(stations, config.search);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "station server listening");
    info!("  GET  /health        - Health check");
    info!("  GET  /stations      - List stations, or search with ?q=");
    info!("  GET  /stations/:id  - Look up a station");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("station server stopped");
    Ok(())
}

/// Periodically re-read the station file in the background.
fn spawn_reload(stations: StationStore, period: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match stations.reload().await {
                Ok(count) => info!(count, "reloaded stations"),
                Err(e) => warn!(error = %e, "failed to reload stations, keeping previous list"),
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
