// ABOUTME: Repository seams between the prediction manager and SQLite storage
// ABOUTME: ActivityRepository feeds analyzers and listings; PredictionStore is the only prediction write path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Repository traits
//!
//! The prediction manager holds these as trait objects so tests can swap in
//! fakes (for example a store that always fails).

mod activity_repository;
mod prediction_repository;

pub use activity_repository::ActivityRepositoryImpl;
pub use prediction_repository::PredictionStoreImpl;

use crate::constants::limits;
use crate::errors::DatabaseError;
use crate::models::{ActivityRecord, ActivitySeries, Prediction, PredictionType};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use uuid::Uuid;

/// Date range and page window for listing activity records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityQuery {
    /// Earliest date, inclusive
    pub start_date: Option<NaiveDate>,
    /// Latest date, inclusive
    pub end_date: Option<NaiveDate>,
    /// Page size
    pub limit: u32,
    /// Records skipped before the page starts
    pub offset: u32,
}

impl Default for ActivityQuery {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            limit: limits::DEFAULT_ACTIVITY_PAGE_SIZE,
            offset: 0,
        }
    }
}

/// Source of daily activity records
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// A user's records dated on or after `since`, ascending, one per date
    async fn fetch_series(&self, user_id: Uuid, since: NaiveDate)
        -> Result<ActivitySeries, DatabaseError>;

    /// Insert or overwrite records keyed by `(user_id, date)`; returns the number written
    async fn upsert_activities(&self, records: &[ActivityRecord]) -> Result<usize, DatabaseError>;

    /// One page of records matching `query`, newest first
    async fn list_activities(
        &self,
        user_id: Uuid,
        query: &ActivityQuery,
    ) -> Result<Vec<ActivityRecord>, DatabaseError>;

    /// Number of records matching `query`'s date range
    async fn count_activities(&self, user_id: Uuid, query: &ActivityQuery)
        -> Result<u64, DatabaseError>;

    /// The record for one day, if any
    async fn get_activity(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<ActivityRecord>, DatabaseError>;
}

/// Persistence for analyzer results
#[async_trait]
pub trait PredictionStore: Send + Sync {
    /// Insert, or update in place when `(user_id, date, prediction_type)` already exists
    async fn upsert(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        prediction_type: PredictionType,
        description: &str,
        data: &Value,
    ) -> Result<Prediction, DatabaseError>;

    /// Every prediction stored for a user on `date`
    async fn list_for_date(&self, user_id: Uuid, date: NaiveDate)
        -> Result<Vec<Prediction>, DatabaseError>;

    /// The prediction stored for one key, if any
    async fn get(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        prediction_type: PredictionType,
    ) -> Result<Option<Prediction>, DatabaseError>;
}
