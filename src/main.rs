// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};
use tracing_subscriber::EnvFilter;

use crate::application::route_options_service::RouteOptionsService;
use crate::application::selection_controller::SelectionController;
use crate::application::series_transformer::SeriesTransformer;
use crate::infrastructure::config::load_settings;
use crate::infrastructure::http_backend::HttpMonitoringBackend;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let settings = load_settings()?;
    let formatter = settings.display.formatter()?;

    // Create backend client (infrastructure layer)
    let backend = Arc::new(HttpMonitoringBackend::new(
        &settings.backend.base_url,
        Duration::from_secs(settings.backend.request_timeout_secs),
    )?);

    // Create services (application layer)
    let route_options = RouteOptionsService::new(backend.clone());
    let controller = Arc::new(SelectionController::new(
        backend.clone(),
        SeriesTransformer::new(formatter),
        settings.display.clear_on_failure,
    ));

    if let Err(e) = route_options.check_availability().await {
        tracing::warn!("{} at {}", e, settings.backend.base_url);
    }

    let state = Arc::new(AppState {
        route_options,
        controller,
    });

    // Start server
    let addr: SocketAddr = settings.server.bind_address.parse()?;
    tracing::info!("Starting ping-monitor service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router(state)).await?;

    Ok(())
}
