//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, outbound clients, worker spawning, and the Axum
//! server lifecycle.

use crate::api::middleware::AdminCredentials;
use crate::application::match_worker::{MatchQueue, run_match_worker};
use crate::application::matching::MatchOrchestrator;
use crate::config::Config;
use crate::infrastructure::StorageBackend;
use crate::infrastructure::http::{HttpCompletionClient, ReqwestPageFetcher};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds the matching pipeline over `storage` from the configured clients.
///
/// # Errors
///
/// Returns an error if an HTTP client cannot be built or `COMPLETION_URL`
/// is not a usable base URL.
pub fn build_orchestrator(config: &Config, storage: &StorageBackend) -> Result<MatchOrchestrator> {
    let fetcher = ReqwestPageFetcher::new(
        Duration::from_secs(config.fetch_timeout_secs),
        &config.fetch_user_agent,
    )
    .context("Failed to build page fetcher")?;

    let completion = HttpCompletionClient::new(
        &config.completion_url,
        Duration::from_secs(config.completion_timeout_secs),
    )
    .context("Failed to build completion client")?;

    Ok(MatchOrchestrator::new(
        storage.book_repository(),
        Arc::new(fetcher),
        Arc::new(completion),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (PostgreSQL with migrations, or JSON files)
/// - Page fetcher and completion client
/// - Background match worker
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Storage initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let storage = StorageBackend::connect(&config).await?;
    tracing::info!("Storage backend: {}", storage.name());

    let orchestrator = Arc::new(build_orchestrator(&config, &storage)?);

    let (match_queue, match_rx) = MatchQueue::channel(config.match_queue_capacity);
    let admin = AdminCredentials::new(&config.admin_username, &config.admin_password);
    tracing::info!("Admin API enabled for user '{}'", admin.username());
    let state = AppState::new(storage, match_queue, admin);

    tokio::spawn(run_match_worker(
        match_rx,
        orchestrator,
        state.link_service.clone(),
        config.match_worker_concurrency,
    ));

    let app = app_router(state, config.behind_proxy, &config.static_dir);

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

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
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

    tracing::info!("Shutdown signal received");
}
