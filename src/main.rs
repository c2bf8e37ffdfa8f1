//! Contact API server.
//!
//! Serves company contact information and accepts consultation and
//! quote request submissions for the marketing site.
//!
//! Usage:
//!   cargo run
//!
//! Environment:
//!   CONTACT_HOST        - Server host (default: 0.0.0.0)
//!   PORT / CONTACT_PORT - Server port (default: 3001)
//!   RUST_LOG            - Log filter (default: info)

use contact_api::{create_router, AppState, ServerConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    // Create app state
    let state = Arc::new(AppState::new());
    let state_for_shutdown = state.clone();

    // Create router
    let app = create_router(state);

    let config = ServerConfig::default();
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("📬 Contact API starting on http://{}", addr);
    info!("");
    info!("Endpoints:");
    info!("  GET  /api/contact                           - Company contact information");
    info!("  POST /api/contact/consultation              - Submit consultation request");
    info!("  GET  /api/contact/consultation-requests     - List consultation requests");
    info!("  GET  /api/contact/consultation-requests/:id - Fetch one consultation request");
    info!("  POST /api/contact/quote                     - Submit quote request");
    info!("  GET  /api/contact/quote-requests            - List quote requests");
    info!("  GET  /api/contact/quote-requests/:id        - Fetch one quote request");
    info!("  GET  /health                                - Health check");
    info!("  GET  /stats                                 - Submission counters");
    info!("");
    info!("Press Ctrl+C for graceful shutdown");
    info!("");

    // Start server with graceful shutdown
    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    // Everything is in-memory, so shutdown discards the stores; log what
    // is being dropped so operators can see it in the deployment logs.
    info!("");
    info!("🛑 Shutdown signal received");
    info!(
        "   Discarding {} consultation request(s) and {} quote request(s)",
        state_for_shutdown.consultations.len(),
        state_for_shutdown.quotes.len(),
    );
    info!("📬 Contact API shutdown complete");

    Ok(())
}
