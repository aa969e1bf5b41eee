//! Portfolio server binary.
//!
//! Starts the axum web server and stops it gracefully on Ctrl+C.

use tracing_subscriber::EnvFilter;

use portfolio_lib::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting portfolio server");

    let state = portfolio_lib::init_foundation()?;

    let signal_state = state.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Shutting down..."),
            Err(e) => tracing::error!("Failed to listen for Ctrl+C: {e}"),
        }
        signal_state.shutdown_token().cancel();
    });

    server::start_server(state).await?;
    tracing::info!("Server stopped");
    Ok(())
}
