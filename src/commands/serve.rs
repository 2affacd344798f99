//! Serve command - runs the HTTP API until interrupted.

use std::sync::Arc;

use crate::api::{cors_layer, create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, UserStore};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    if args.skip_migrations {
        tracing::warn!("Skipping migrations; schema must already be current");
    } else {
        db.apply_pending().await?;
    }

    let cors = cors_layer(&config.cors_origins);
    let users = Arc::new(UserStore::new(db.connection()));
    let app = create_router(AppState::from_store(users, config)).layer(cors);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("cannot bind {}: {}", addr, e)))?;

    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("server stopped: {}", e)))?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
