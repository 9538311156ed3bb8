// ABOUTME: Activity record queries: batch upsert by (user, date), windowed series, and paged listings
// ABOUTME: Validates records before writing and rebuilds a date-ordered ActivitySeries on read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::repositories::ActivityQuery;
use super::Database;
use crate::constants::database::DATE_FORMAT;
use crate::errors::DatabaseError;
use crate::models::{ActivityRecord, ActivitySeries};
use chrono::{NaiveDate, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Insert or overwrite daily activity records, one row per `(user_id, date)`
    ///
    /// All records are validated first; nothing is written if any record is invalid.
    /// The batch is applied in a single transaction.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidData` for a malformed record, or a query
    /// error if the write fails
    pub async fn upsert_activities(&self, records: &[ActivityRecord]) -> Result<usize, DatabaseError> {
        for record in records {
            record.validate()?;
        }

        let now = Utc::now().to_rfc3339();
        let mut tx = self.pool().begin().await?;
        for record in records {
            sqlx::query(
                r"
                INSERT INTO activities (user_id, date, steps, distance_km, active_minutes, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT(user_id, date) DO UPDATE SET
                    steps = excluded.steps,
                    distance_km = excluded.distance_km,
                    active_minutes = excluded.active_minutes,
                    updated_at = excluded.updated_at
                ",
            )
            .bind(record.user_id.to_string())
            .bind(record.date.format(DATE_FORMAT).to_string())
            .bind(record.steps)
            .bind(record.distance_km)
            .bind(record.active_minutes)
            .bind(&now)
            .bind(&now)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Ok(records.len())
    }

    /// Fetch a user's records dated on or after `since`, ascending by date
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn get_activity_series(
        &self,
        user_id: Uuid,
        since: NaiveDate,
    ) -> Result<ActivitySeries, DatabaseError> {
        let rows = sqlx::query(
            r"
            SELECT user_id, date, steps, distance_km, active_minutes
            FROM activities
            WHERE user_id = $1 AND date >= $2
            ORDER BY date ASC
            ",
        )
        .bind(user_id.to_string())
        .bind(since.format(DATE_FORMAT).to_string())
        .fetch_all(self.pool())
        .await?;

        rows.iter()
            .map(|row| row_to_activity(row, user_id))
            .collect::<Result<Vec<_>, _>>()
            .map(ActivitySeries::new)
    }

    /// One page of a user's records inside an optional date range, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn list_activities(
        &self,
        user_id: Uuid,
        query: &ActivityQuery,
    ) -> Result<Vec<ActivityRecord>, DatabaseError> {
        let rows = sqlx::query(
            r"
            SELECT user_id, date, steps, distance_km, active_minutes
            FROM activities
            WHERE user_id = $1
              AND ($2 IS NULL OR date >= $2)
              AND ($3 IS NULL OR date <= $3)
            ORDER BY date DESC
            LIMIT $4 OFFSET $5
            ",
        )
        .bind(user_id.to_string())
        .bind(query.start_date.map(|date| date.format(DATE_FORMAT).to_string()))
        .bind(query.end_date.map(|date| date.format(DATE_FORMAT).to_string()))
        .bind(i64::from(query.limit))
        .bind(i64::from(query.offset))
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(|row| row_to_activity(row, user_id)).collect()
    }

    /// Number of a user's records inside an optional date range
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_activities(
        &self,
        user_id: Uuid,
        query: &ActivityQuery,
    ) -> Result<u64, DatabaseError> {
        let total: i64 = sqlx::query_scalar(
            r"
            SELECT COUNT(*) FROM activities
            WHERE user_id = $1
              AND ($2 IS NULL OR date >= $2)
              AND ($3 IS NULL OR date <= $3)
            ",
        )
        .bind(user_id.to_string())
        .bind(query.start_date.map(|date| date.format(DATE_FORMAT).to_string()))
        .bind(query.end_date.map(|date| date.format(DATE_FORMAT).to_string()))
        .fetch_one(self.pool())
        .await?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    /// The record for one `(user_id, date)`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is malformed
    pub async fn get_activity(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<ActivityRecord>, DatabaseError> {
        sqlx::query(
            r"
            SELECT user_id, date, steps, distance_km, active_minutes
            FROM activities
            WHERE user_id = $1 AND date = $2
            ",
        )
        .bind(user_id.to_string())
        .bind(date.format(DATE_FORMAT).to_string())
        .fetch_optional(self.pool())
        .await?
        .map(|row| row_to_activity(&row, user_id))
        .transpose()
    }
}

fn row_to_activity(row: &SqliteRow, user_id: Uuid) -> Result<ActivityRecord, DatabaseError> {
    let date: String = row.try_get("date")?;
    let date = NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|e| DatabaseError::InvalidData {
        field: "date".to_owned(),
        reason: format!("stored value '{date}' is not a date: {e}"),
    })?;

    Ok(ActivityRecord::new(
        user_id,
        date,
        row.try_get("steps")?,
        row.try_get("distance_km")?,
        row.try_get("active_minutes")?,
    ))
}
