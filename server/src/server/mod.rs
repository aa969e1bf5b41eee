pub mod api;
pub mod assets;
pub mod router;

use crate::app::SharedState;
use anyhow::Result;

/// Start the axum HTTP server. Returns once the shutdown token is cancelled.
pub async fn start_server(state: SharedState) -> Result<()> {
    let addr = state.config().bind_addr();
    let shutdown_token = state.shutdown_token().clone();
    let app = router::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Portfolio server listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async move { shutdown_token.cancelled().await })
        .await?;

    Ok(())
}
