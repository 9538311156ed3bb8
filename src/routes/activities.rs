// ABOUTME: Route handlers for importing and reading daily activity records
// ABOUTME: Import regenerates predictions in the background; reads page by date range or fetch one day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::predictions::{parse_date, parse_user_id};
use crate::constants::limits;
use crate::database::repositories::ActivityQuery;
use crate::errors::{AppError, AppResult};
use crate::models::ActivityRecord;
use crate::server::ServerResources;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// One day of imported activity
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityInput {
    /// Calendar day
    pub date: NaiveDate,
    /// Step count
    #[serde(default)]
    pub steps: u32,
    /// Distance in kilometres
    #[serde(default)]
    pub distance_km: f64,
    /// Active minutes
    #[serde(default)]
    pub active_minutes: u32,
}

impl ActivityInput {
    /// Attach the owning user
    #[must_use]
    pub const fn into_record(self, user_id: Uuid) -> ActivityRecord {
        ActivityRecord::new(
            user_id,
            self.date,
            self.steps,
            self.distance_km,
            self.active_minutes,
        )
    }
}

/// Query parameters for listing activity records
#[derive(Debug, Default, Deserialize)]
pub struct ActivityListQuery {
    /// Earliest date, inclusive (`YYYY-MM-DD`)
    pub start_date: Option<String>,
    /// Latest date, inclusive (`YYYY-MM-DD`)
    pub end_date: Option<String>,
    /// Page size, clamped to `1..=100`
    pub limit: Option<u32>,
    /// Records to skip
    pub offset: Option<u32>,
}

impl ActivityListQuery {
    fn into_query(self) -> AppResult<ActivityQuery> {
        Ok(ActivityQuery {
            start_date: self.start_date.as_deref().map(parse_date).transpose()?,
            end_date: self.end_date.as_deref().map(parse_date).transpose()?,
            limit: self
                .limit
                .unwrap_or(limits::DEFAULT_ACTIVITY_PAGE_SIZE)
                .clamp(1, limits::MAX_ACTIVITY_PAGE_SIZE),
            offset: self.offset.unwrap_or(0),
        })
    }
}

/// Activity routes implementation
pub struct ActivityRoutes;

impl ActivityRoutes {
    /// Create all activity routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/users/:user_id/activities",
                get(Self::handle_list_activities).post(Self::handle_import_activities),
            )
            .route(
                "/api/users/:user_id/activities/:date",
                get(Self::handle_activity_by_date),
            )
            .with_state(resources)
    }

    /// Handle POST /api/users/:user_id/activities
    async fn handle_import_activities(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        body: Result<Json<Vec<ActivityInput>>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let Json(body) = body.map_err(|rejection| {
            AppError::invalid_input(format!("Invalid activity payload: {}", rejection.body_text()))
        })?;
        if body.is_empty() {
            return Err(AppError::invalid_input("No activity records supplied"));
        }

        let records: Vec<ActivityRecord> = body
            .into_iter()
            .map(|input| input.into_record(user_id))
            .collect();

        let stored = resources
            .prediction_manager
            .import_activities(user_id, &records)
            .await?;

        // Predictions are refreshed off the request path
        drop(resources.prediction_manager.schedule_generate_all(user_id));

        Ok((StatusCode::OK, Json(json!({ "stored": stored }))).into_response())
    }

    /// Handle GET /api/users/:user_id/activities
    async fn handle_list_activities(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        query: Result<Query<ActivityListQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let Query(query) = query.map_err(|rejection| {
            AppError::invalid_input(format!("Invalid query: {}", rejection.body_text()))
        })?;

        let page = resources
            .prediction_manager
            .activities(user_id, &query.into_query()?)
            .await?;

        Ok((StatusCode::OK, Json(page)).into_response())
    }

    /// Handle GET /api/users/:user_id/activities/:date
    async fn handle_activity_by_date(
        State(resources): State<Arc<ServerResources>>,
        Path((user_id, date)): Path<(String, String)>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let date = parse_date(&date)?;

        let record = resources.prediction_manager.activity_on(user_id, date).await?;

        Ok((StatusCode::OK, Json(record)).into_response())
    }
}
