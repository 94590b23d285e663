//! # birdviewd: birdview daemon
//!
//! Composition root that wires the renderer, routes and settings together
//! and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing` from the configured filter
//! - Register the page routes and freeze the table before binding
//! - Publish the initial settings snapshot and watch the config file for
//!   changes
//! - Build the axum router, injecting the render service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no rendering logic belongs here.

mod config;
mod watcher;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use birdview_adapter_http_axum::router;
use birdview_adapter_http_axum::state::AppState;
use birdview_adapter_templates_askama::AskamaRenderer;
use birdview_app::route_table::default_routes;
use birdview_app::services::render_service::RenderService;
use birdview_app::settings_store::SettingsStore;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = config::config_path();
    let config = Config::load(&config_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Routes
    let routes = default_routes()?.freeze();
    tracing::info!(routes = routes.len(), "page routes registered");

    let renderer = AskamaRenderer::new();
    let missing = renderer.missing_templates(&routes);
    if !missing.is_empty() {
        let missing = missing.join(", ");
        tracing::error!(templates = %missing, "routes reference unknown templates");
        return Err(format!("routes reference unknown templates: {missing}").into());
    }

    // Settings
    let settings = Arc::new(SettingsStore::new(config.settings()));
    let _watcher = if config_path.exists() {
        Some(watcher::spawn(&config_path, Arc::clone(&settings))?)
    } else {
        tracing::info!(
            path = %config_path.display(),
            "no config file found, running with defaults"
        );
        None
    };

    // HTTP
    let render_service = RenderService::new(routes, renderer);
    let state = AppState::from_arcs(Arc::new(render_service), settings);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "birdviewd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("birdviewd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
