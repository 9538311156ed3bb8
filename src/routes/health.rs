// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Reports liveness and whether the database answers a trivial query
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::server::ServerResources;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .with_state(resources)
    }

    /// Handle GET /health
    async fn handle_health(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
        let database = match sqlx::query("SELECT 1").execute(resources.database.pool()).await {
            Ok(_) => "ok",
            Err(e) => {
                warn!(error = %e, "Health check database query failed");
                "unavailable"
            }
        };

        Json(json!({
            "status": "healthy",
            "service": resources.service_name,
            "database": database,
            "timestamp": Utc::now().to_rfc3339()
        }))
    }
}
