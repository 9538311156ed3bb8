// ABOUTME: Prediction row queries: atomic upsert by (user, date, type) and date lookups
// ABOUTME: The upsert is a single INSERT ... ON CONFLICT DO UPDATE so concurrent writers never duplicate a key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Database;
use crate::constants::database::DATE_FORMAT;
use crate::errors::DatabaseError;
use crate::models::{Prediction, PredictionType};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

const PREDICTION_COLUMNS: &str =
    "id, user_id, prediction_date, prediction_type, description, prediction_data, created_at, updated_at";

impl Database {
    /// Insert a prediction or update the existing row for the same key
    ///
    /// On conflict the description, payload, and `updated_at` are replaced while
    /// `id` and `created_at` are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded or the write fails
    pub async fn upsert_prediction(
        &self,
        user_id: Uuid,
        prediction_date: NaiveDate,
        prediction_type: PredictionType,
        description: &str,
        prediction_data: &Value,
    ) -> Result<Prediction, DatabaseError> {
        let payload = serde_json::to_string(prediction_data).map_err(|e| {
            DatabaseError::SerializationError {
                entity: "prediction_data",
                reason: e.to_string(),
            }
        })?;
        let now = Utc::now().to_rfc3339();

        let query = format!(
            r"
            INSERT INTO predictions ({PREDICTION_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT(user_id, prediction_date, prediction_type) DO UPDATE SET
                description = excluded.description,
                prediction_data = excluded.prediction_data,
                updated_at = excluded.updated_at
            RETURNING {PREDICTION_COLUMNS}
            "
        );

        let row = sqlx::query(&query)
            .bind(Uuid::new_v4().to_string())
            .bind(user_id.to_string())
            .bind(prediction_date.format(DATE_FORMAT).to_string())
            .bind(prediction_type.as_str())
            .bind(description)
            .bind(payload)
            .bind(&now)
            .bind(&now)
            .fetch_one(self.pool())
            .await?;

        row_to_prediction(&row)
    }

    /// All predictions stored for a user on one date, ordered by type
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn get_predictions_for_date(
        &self,
        user_id: Uuid,
        prediction_date: NaiveDate,
    ) -> Result<Vec<Prediction>, DatabaseError> {
        let query = format!(
            "SELECT {PREDICTION_COLUMNS} FROM predictions
             WHERE user_id = $1 AND prediction_date = $2
             ORDER BY prediction_type ASC"
        );

        sqlx::query(&query)
            .bind(user_id.to_string())
            .bind(prediction_date.format(DATE_FORMAT).to_string())
            .fetch_all(self.pool())
            .await?
            .iter()
            .map(row_to_prediction)
            .collect()
    }

    /// The prediction stored for one `(user, date, type)` key, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is malformed
    pub async fn get_prediction(
        &self,
        user_id: Uuid,
        prediction_date: NaiveDate,
        prediction_type: PredictionType,
    ) -> Result<Option<Prediction>, DatabaseError> {
        let query = format!(
            "SELECT {PREDICTION_COLUMNS} FROM predictions
             WHERE user_id = $1 AND prediction_date = $2 AND prediction_type = $3"
        );

        sqlx::query(&query)
            .bind(user_id.to_string())
            .bind(prediction_date.format(DATE_FORMAT).to_string())
            .bind(prediction_type.as_str())
            .fetch_optional(self.pool())
            .await?
            .as_ref()
            .map(row_to_prediction)
            .transpose()
    }
}

fn row_to_prediction(row: &SqliteRow) -> Result<Prediction, DatabaseError> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let prediction_date: String = row.try_get("prediction_date")?;
    let prediction_type: String = row.try_get("prediction_type")?;
    let prediction_data: String = row.try_get("prediction_data")?;
    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(Prediction {
        id: parse_uuid("id", &id)?,
        user_id: parse_uuid("user_id", &user_id)?,
        prediction_date: NaiveDate::parse_from_str(&prediction_date, DATE_FORMAT)
            .map_err(|e| invalid_column("prediction_date", &e))?,
        prediction_type: prediction_type
            .parse()
            .map_err(|e| invalid_column("prediction_type", &e))?,
        description: row.try_get("description")?,
        prediction_data: serde_json::from_str(&prediction_data).map_err(|e| {
            DatabaseError::SerializationError {
                entity: "prediction_data",
                reason: e.to_string(),
            }
        })?,
        created_at: parse_timestamp("created_at", &created_at)?,
        updated_at: parse_timestamp("updated_at", &updated_at)?,
    })
}

fn parse_uuid(field: &str, value: &str) -> Result<Uuid, DatabaseError> {
    Uuid::parse_str(value).map_err(|e| invalid_column(field, &e))
}

fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>, DatabaseError> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|e| invalid_column(field, &e))
}

fn invalid_column(field: &str, error: &impl ToString) -> DatabaseError {
    DatabaseError::InvalidData {
        field: field.to_owned(),
        reason: format!("stored value is malformed: {}", error.to_string()),
    }
}
