// ABOUTME: Route handlers for prediction generation and retrieval
// ABOUTME: One endpoint per analyzer, generate-all, and stored predictions by date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Prediction routes
//!
//! Authentication is out of scope for this service; the user is addressed by
//! UUID in the path. An analyzer with too little data answers `200 {}`.

use crate::constants::database::DATE_FORMAT;
use crate::errors::{AppError, AppResult};
use crate::server::ServerResources;
use crate::services::PredictionResponse;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Query parameters for listing stored predictions
#[derive(Debug, Default, Deserialize)]
pub struct PredictionDateQuery {
    /// `YYYY-MM-DD`; defaults to today
    pub date: Option<String>,
}

/// Prediction routes implementation
pub struct PredictionRoutes;

impl PredictionRoutes {
    /// Create all prediction routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/users/:user_id/predictions",
                get(Self::handle_list_predictions),
            )
            .route(
                "/api/users/:user_id/predictions/generate",
                post(Self::handle_generate_all),
            )
            .route(
                "/api/users/:user_id/predictions/goals",
                get(Self::handle_goal_predictions),
            )
            .route(
                "/api/users/:user_id/predictions/anomalies",
                get(Self::handle_anomalies),
            )
            .route(
                "/api/users/:user_id/predictions/trends",
                get(Self::handle_trends),
            )
            .route(
                "/api/users/:user_id/predictions/insights",
                get(Self::handle_insights),
            )
            .with_state(resources)
    }

    /// Handle POST /api/users/:user_id/predictions/generate
    async fn handle_generate_all(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let predictions = resources.prediction_manager.generate_all(user_id).await;

        Ok((
            StatusCode::OK,
            Json(json!({
                "message": "Predictions generated successfully",
                "predictions": predictions,
            })),
        )
            .into_response())
    }

    /// Handle GET /api/users/:user_id/predictions/goals
    async fn handle_goal_predictions(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let result = resources.prediction_manager.goal_predictions(user_id).await?;
        Ok(analysis_response(result))
    }

    /// Handle GET /api/users/:user_id/predictions/anomalies
    async fn handle_anomalies(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let result = resources.prediction_manager.anomalies(user_id).await?;
        Ok(analysis_response(result))
    }

    /// Handle GET /api/users/:user_id/predictions/trends
    async fn handle_trends(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let result = resources.prediction_manager.trends(user_id).await?;
        Ok(analysis_response(result))
    }

    /// Handle GET /api/users/:user_id/predictions/insights
    async fn handle_insights(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let result = resources.prediction_manager.insights(user_id).await?;
        Ok(analysis_response(result))
    }

    /// Handle GET /api/users/:user_id/predictions?date=YYYY-MM-DD
    async fn handle_list_predictions(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Query(query): Query<PredictionDateQuery>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let date = match query.date.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => Utc::now().date_naive(),
        };

        let predictions = resources
            .prediction_manager
            .stored_predictions(user_id, date)
            .await?;

        Ok((
            StatusCode::OK,
            Json(json!({
                "date": date,
                "total": predictions.len(),
                "predictions": predictions,
            })),
        )
            .into_response())
    }
}

fn analysis_response<R: Serialize>(result: Option<PredictionResponse<R>>) -> Response {
    match result {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => (StatusCode::OK, Json(json!({}))).into_response(),
    }
}

/// Parse a path user id
///
/// # Errors
///
/// Returns `InvalidInput` when the value is not a UUID
pub fn parse_user_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::invalid_input(format!("Invalid user id: {raw}")))
}

/// Parse a `YYYY-MM-DD` date from a path or query
///
/// # Errors
///
/// Returns `InvalidInput` when the value is not a calendar date
pub fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| AppError::invalid_input(format!("Invalid date '{raw}', expected YYYY-MM-DD")))
}
