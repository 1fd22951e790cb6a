//! HTTP server initialization and runtime setup.
//!
//! Handles client construction, state wiring, and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::client::EntityClient;
use crate::infrastructure::swapi::HttpEntityClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SWAPI HTTP client
/// - Query services sharing one shutdown token
/// - Axum HTTP server with graceful shutdown
///
/// On Ctrl-C or SIGTERM the shutdown token is cancelled, so queries still in
/// flight stop fetching and answer with `query cancelled` before the server
/// drains.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client: Arc<dyn EntityClient> = Arc::new(
        HttpEntityClient::new(
            config.swapi_base_url.clone(),
            config.request_timeout(),
            &config.user_agent,
            config.max_retries,
        )
        .context("Failed to build SWAPI client")?,
    );
    tracing::info!(base_url = %config.swapi_base_url, "SWAPI client ready");

    let shutdown = CancellationToken::new();
    let state = AppState::new(client, config.page_size, shutdown.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal(shutdown))
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM after cancelling `shutdown`.
async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
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

    tracing::info!("Shutdown signal received, cancelling in-flight queries");
    shutdown.cancel();
}
