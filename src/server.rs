//! HTTP server initialization and runtime setup.
//!
//! Handles storage and session store setup and the Axum server lifecycle.

use crate::config::{Config, StorageBackend};
use crate::infrastructure::persistence::{
    MemoryUserRepository, MemoryWebsiteRepository, PgUserRepository, PgWebsiteRepository,
};
use crate::routes::app_router;
use crate::state::AppState;
use crate::web::session::create_session_layer;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tower_sessions::{MemoryStore, SessionManagerLayer, SessionStore};
use tower_sessions_sqlx_store::PostgresStore;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool, migrations, and session table (postgres backend)
/// - In-process repositories and session store (memory backend)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    match config.storage_backend {
        StorageBackend::Postgres => {
            let pool = connect_pool(&config).await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");

            let session_store = PostgresStore::new(pool.clone());
            session_store
                .migrate()
                .await
                .context("Failed to create session table")?;

            let pool = Arc::new(pool);
            let state = AppState::new(
                Arc::new(PgUserRepository::new(pool.clone())),
                Arc::new(PgWebsiteRepository::new(pool)),
                config.ownership_mode,
            );

            let session_layer = create_session_layer(
                session_store,
                config.secure_cookies(),
                config.session_expiry_seconds,
            );

            serve(&config, state, session_layer).await
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; all data is lost on shutdown");

            let state = AppState::new(
                Arc::new(MemoryUserRepository::new()),
                Arc::new(MemoryWebsiteRepository::new()),
                config.ownership_mode,
            );

            let session_layer = create_session_layer(
                MemoryStore::default(),
                config.secure_cookies(),
                config.session_expiry_seconds,
            );

            serve(&config, state, session_layer).await
        }
    }
}

/// Opens the PostgreSQL pool with the configured limits.
///
/// # Errors
///
/// Returns an error if the database URL is missing or the connection fails.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is not configured")?;

    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")
}

async fn serve<Store>(
    config: &Config,
    state: AppState,
    session_layer: SessionManagerLayer<Store>,
) -> Result<()>
where
    Store: SessionStore + Clone,
{
    let app = app_router(state, session_layer);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
