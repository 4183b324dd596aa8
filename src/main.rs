//! Timepiece - a clock, stopwatch and countdown widget
//! 
//! This is the main entry point for the timepiece server.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use timepiece::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::ticker_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("timepiece={},tower_http=info", config.log_level()))
        .init();

    info!("Starting timepiece v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, mode={}, countdown={}min",
          config.host, config.port, config.mode, config.minutes);

    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        config.mode,
        config.minutes,
    ));

    // Start the timer engine
    let ticker = tokio::spawn(ticker_task(Arc::clone(&state)));

    let app = create_router(state);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /view              - Current display and controls");
    info!("  POST /mode/:mode        - Switch to clock, stopwatch or countdown");
    info!("  POST /stopwatch/toggle  - Start/Stop the stopwatch");
    info!("  POST /stopwatch/pause   - Pause/Resume the stopwatch");
    info!("  PUT  /countdown/input   - Set countdown minutes");
    info!("  POST /countdown/start   - Start the countdown");
    info!("  POST /countdown/stop    - Stop the countdown");
    info!("  POST /countdown/pause   - Pause/Unpause the countdown");
    info!("  GET  /status            - Status, schedule and uptime");
    info!("  GET  /health            - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        result = shutdown_signal() => {
            match result {
                Ok(()) => info!("Shutdown signal received"),
                Err(e) => tracing::error!("Failed to install signal handler: {}", e),
            }
        }
    }

    // Tearing down the ticker drops its armed timer
    ticker.abort();

    info!("Server shutdown complete");
    Ok(())
}
