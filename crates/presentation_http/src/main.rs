//! Weather dashboard HTTP server
//!
//! Main entry point for the HTTP API server.

use std::{future::IntoFuture, sync::Arc};

use anyhow::Context;
use application::WeatherService;
use infrastructure::{AppConfig, OpenWeatherAdapter, init_telemetry};
use presentation_http::{create_app, set_expose_internal_errors, state::AppState};
use tokio::{net::TcpListener, signal, sync::Notify};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging is configured from the loaded config, so load it first
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_telemetry(&config.telemetry()).context("Failed to initialize logging")?;

    info!(
        "🌦️ Weather Dashboard v{} starting ({})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );
    info!(
        host = %config.server.host,
        port = %config.server.port,
        base_url = %config.openweather.base_url,
        units = %config.openweather.units,
        "Configuration loaded"
    );

    set_expose_internal_errors(!config.is_production());

    if !config.openweather.has_api_key() {
        warn!("OPENWEATHER_API_KEY is not set; weather requests will fail");
    }

    let adapter = OpenWeatherAdapter::new(config.openweather.to_client_config())
        .context("Failed to initialize OpenWeatherMap client")?;
    let weather_service = WeatherService::new(Arc::new(adapter));

    let addr = config.server.bind_address();
    let shutdown_timeout = config.server.shutdown_timeout();

    let app = create_app(AppState::new(weather_service, config));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🚀 Server listening on http://{}", addr);
    info!("📚 API docs: http://{}/swagger-ui", addr);

    let draining = Arc::new(Notify::new());
    let signalled = Arc::clone(&draining);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        signalled.notify_one();
    });

    tokio::select! {
        result = server.into_future() => result.context("Server error")?,
        () = async {
            draining.notified().await;
            tokio::time::sleep(shutdown_timeout).await;
        } => {
            warn!(timeout = ?shutdown_timeout, "Connections still open after shutdown timeout, exiting");
        }
    }

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
