//! HTTP front of the relay.
//!
//! Five lookup routes, a help page and a catch-all 404. Every handler
//! failure is turned into a JSON error body by [`AppError`].

mod error;
mod handlers;
mod routes;

pub use error::AppError;
pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use cityscout_core::{Config, Relay};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

impl AppState {
    pub fn new(relay: Relay) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}

/// Start the web server and run until Ctrl-C.
pub async fn serve(config: &Config) -> anyhow::Result<()> {
    for key in config.missing_keys() {
        tracing::warn!("No API key configured for {}; that route will fail upstream", key);
    }

    let relay = Relay::from_config(config)?;
    let app = create_router(AppState::new(relay));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server is alive and listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        // Without a signal handler, run until killed
        std::future::pending::<()>().await;
    }
}
