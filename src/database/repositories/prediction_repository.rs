// ABOUTME: Prediction store implementation
// ABOUTME: Delegates to the single-statement SQLite upsert and date lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::PredictionStore;
use crate::database::Database;
use crate::errors::DatabaseError;
use crate::models::{Prediction, PredictionType};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use uuid::Uuid;

/// `SQLite` implementation of `PredictionStore`
pub struct PredictionStoreImpl {
    db: Database,
}

impl PredictionStoreImpl {
    /// Create a new `PredictionStore` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PredictionStore for PredictionStoreImpl {
    async fn upsert(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        prediction_type: PredictionType,
        description: &str,
        data: &Value,
    ) -> Result<Prediction, DatabaseError> {
        self.db
            .upsert_prediction(user_id, date, prediction_type, description, data)
            .await
    }

    async fn list_for_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Prediction>, DatabaseError> {
        self.db.get_predictions_for_date(user_id, date).await
    }

    async fn get(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        prediction_type: PredictionType,
    ) -> Result<Option<Prediction>, DatabaseError> {
        self.db.get_prediction(user_id, date, prediction_type).await
    }
}
