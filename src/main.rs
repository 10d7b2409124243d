//! Student Service - A small CRUD HTTP service
//!
//! Exposes a single student resource backed by a PostgreSQL table.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::info;

use student_service::{create_router, init_tracing, AppState, Config, PgStudentStore};

/// Main entry point for the student service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect the Postgres store
/// 4. Create Axum router for the enabled operations
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting Student Service");

    // Load configuration from environment variables
    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Configuration loaded: database={}, port={}, operations={}, docs={}",
        config.database, config.server_port, config.operations, config.docs_enabled
    );

    let store = PgStudentStore::connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!("Database connection established");

    let state = AppState::from_config(Arc::new(store.clone()), &config);
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);
    if config.docs_enabled {
        info!("API docs at http://{}/swagger/", addr);
    }

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    store.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
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
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
