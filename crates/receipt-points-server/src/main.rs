//! Receipt Points server entry point.

use clap::Parser;
use receipt_points::store::MemoryStore;
use receipt_points::Processor;
use receipt_points_server::{router, telemetry, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    telemetry::init(&config)?;

    // One store for the life of the process, shared with every handler.
    let processor = Processor::new(MemoryStore::new(), config.processor());
    let app = router(AppState::new(processor));

    let listener = TcpListener::bind(config.bind).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
