//! HTTP server initialization and runtime setup.
//!
//! Wires the in-memory stores, services, and the GeoIP provider together,
//! then runs the Axum server until a shutdown signal arrives.

use crate::application::services::{LinkService, StatsService};
use crate::config::Config;
use crate::infrastructure::geoip::{GeoIpService, MaxMindGeoIp, NullGeoIp};
use crate::infrastructure::memory::{MemoryClickRepository, MemoryLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory link and click stores (empty on every start; nothing survives
///   a restart)
/// - GeoIP provider (MaxMind database, or NullGeoIp fallback)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid or the bind fails
/// - A server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let link_repository = Arc::new(MemoryLinkRepository::new());
    let click_repository = Arc::new(MemoryClickRepository::new());

    let geoip: Arc<dyn GeoIpService> = match &config.geoip_db_path {
        Some(path) => match MaxMindGeoIp::open(path) {
            Ok(maxmind) => Arc::new(maxmind),
            Err(e) => {
                tracing::warn!("Failed to open GeoIP database at {path}: {e}, falling back");
                Arc::new(NullGeoIp::new())
            }
        },
        None => Arc::new(NullGeoIp::new()),
    };
    tracing::info!("GeoIP provider: {}", geoip.name());

    let link_service = Arc::new(LinkService::new(
        link_repository.clone(),
        config.base_url.clone(),
    ));
    let stats_service = Arc::new(StatsService::new(link_repository, click_repository));

    let state = AppState::new(link_service, stats_service, geoip, config.behind_proxy);

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

    Ok(())
}

/// Resolves when SIGINT (Ctrl+C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server");
}
