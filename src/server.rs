//! HTTP server initialization and runtime setup.
//!
//! Builds the store and collaborators, wires the services, and runs the Axum
//! server until a shutdown signal arrives.

use crate::config::Config;
use crate::infrastructure::geo::{FixedIpLocator, HttpIpLocator, IpLocator};
use crate::infrastructure::logging::{EventLogger, RemoteLogger, TracingLogger};
use crate::infrastructure::persistence::MemoryStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory store shared by the registry and the ledger
/// - IP locator (HTTP lookup, or a fixed answer when disabled)
/// - Event logger (remote sink, or local tracing only)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - An HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(MemoryStore::new());

    let locator: Arc<dyn IpLocator> = if config.geo_lookup_enabled {
        let locator = HttpIpLocator::new(
            config.geo_lookup_url.clone(),
            Duration::from_secs(config.geo_lookup_timeout_secs),
        )
        .context("Failed to build geolocation client")?;
        tracing::info!("Geolocation enabled ({})", config.geo_lookup_url);
        Arc::new(locator)
    } else {
        tracing::info!("Geolocation disabled");
        Arc::new(FixedIpLocator::unknown())
    };

    let logger: Arc<dyn EventLogger> = if let Some(sink) = &config.log_sink_url {
        let logger = RemoteLogger::new(sink.clone(), config.log_sink_token.clone())
            .context("Failed to build log sink client")?;
        tracing::info!("Remote log sink enabled");
        Arc::new(logger)
    } else {
        Arc::new(TracingLogger::new())
    };

    let state = AppState::new(store, locator, logger, &config);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Completes on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::warn!("Shutdown signal received, draining connections");
}
