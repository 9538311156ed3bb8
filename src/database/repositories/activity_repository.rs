// ABOUTME: Activity repository implementation
// ABOUTME: Reads activity windows, pages, and single days; writes imported daily records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ActivityQuery, ActivityRepository};
use crate::database::Database;
use crate::errors::DatabaseError;
use crate::models::{ActivityRecord, ActivitySeries};
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

/// `SQLite` implementation of `ActivityRepository`
pub struct ActivityRepositoryImpl {
    db: Database,
}

impl ActivityRepositoryImpl {
    /// Create a new `ActivityRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ActivityRepository for ActivityRepositoryImpl {
    async fn fetch_series(
        &self,
        user_id: Uuid,
        since: NaiveDate,
    ) -> Result<ActivitySeries, DatabaseError> {
        self.db.get_activity_series(user_id, since).await
    }

    async fn upsert_activities(&self, records: &[ActivityRecord]) -> Result<usize, DatabaseError> {
        self.db.upsert_activities(records).await
    }

    async fn list_activities(
        &self,
        user_id: Uuid,
        query: &ActivityQuery,
    ) -> Result<Vec<ActivityRecord>, DatabaseError> {
        self.db.list_activities(user_id, query).await
    }

    async fn count_activities(
        &self,
        user_id: Uuid,
        query: &ActivityQuery,
    ) -> Result<u64, DatabaseError> {
        self.db.count_activities(user_id, query).await
    }

    async fn get_activity(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<ActivityRecord>, DatabaseError> {
        self.db.get_activity(user_id, date).await
    }
}
