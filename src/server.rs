// ABOUTME: HTTP server assembly: shared resources, the merged router, and the serve loop
// ABOUTME: Wraps every route in tower-http request tracing and shuts down cleanly on Ctrl+C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::constants::service_names;
use crate::database::repositories::{ActivityRepositoryImpl, PredictionStoreImpl};
use crate::database::Database;
use crate::routes::{ActivityRoutes, HealthRoutes, PredictionRoutes};
use crate::services::PredictionManager;
use anyhow::Result;
use axum::Router;
use std::future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// State shared by every handler
pub struct ServerResources {
    /// Database handle
    pub database: Database,
    /// Prediction orchestrator
    pub prediction_manager: Arc<PredictionManager>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Name reported by the health endpoint
    pub service_name: String,
}

impl ServerResources {
    /// Build resources backed by the `SQLite` repositories
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        let prediction_manager = PredictionManager::new(
            Arc::new(ActivityRepositoryImpl::new(database.clone())),
            Arc::new(PredictionStoreImpl::new(database.clone())),
        );
        Self::with_manager(database, Arc::new(prediction_manager), config)
    }

    /// Build resources around an existing manager
    #[must_use]
    pub fn with_manager(
        database: Database,
        prediction_manager: Arc<PredictionManager>,
        config: ServerConfig,
    ) -> Self {
        Self {
            database,
            prediction_manager,
            config: Arc::new(config),
            service_name: service_names::PIERRE_PREDICTIONS.to_owned(),
        }
    }
}

/// Merge every route group and attach request tracing
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .merge(PredictionRoutes::routes(Arc::clone(resources)))
        .merge(ActivityRoutes::routes(Arc::clone(resources)))
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve until Ctrl+C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let address = resources.config.bind_address();
    let app = build_router(&resources);

    let listener = TcpListener::bind(&address).await?;
    info!("Listening on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        // Without a signal handler the server runs until killed
        future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
