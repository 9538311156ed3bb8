// ABOUTME: Daily activity record and the per-user date-ordered series analyzers consume
// ABOUTME: Holds step count, distance, and active minutes with record-level validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::slice;
use uuid::Uuid;

use super::Metric;
use crate::errors::DatabaseError;

/// One user's activity totals for a single calendar day
///
/// At most one record exists per `(user_id, date)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Owner of the record
    pub user_id: Uuid,
    /// Calendar day the totals belong to
    pub date: NaiveDate,
    /// Step count
    pub steps: u32,
    /// Distance in kilometres
    pub distance_km: f64,
    /// Active minutes
    pub active_minutes: u32,
}

impl ActivityRecord {
    /// Create a record for `user_id` on `date`
    #[must_use]
    pub const fn new(
        user_id: Uuid,
        date: NaiveDate,
        steps: u32,
        distance_km: f64,
        active_minutes: u32,
    ) -> Self {
        Self {
            user_id,
            date,
            steps,
            distance_km,
            active_minutes,
        }
    }

    /// Read a metric as `f64`
    #[must_use]
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Steps => f64::from(self.steps),
            Metric::DistanceKm => self.distance_km,
            Metric::ActiveMinutes => f64::from(self.active_minutes),
        }
    }

    /// Reject records whose distance is negative or not a finite number
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidData` for a malformed distance
    pub fn validate(&self) -> Result<(), DatabaseError> {
        if !self.distance_km.is_finite() || self.distance_km < 0.0 {
            return Err(DatabaseError::InvalidData {
                field: Metric::DistanceKm.as_str().to_owned(),
                reason: format!(
                    "must be a non-negative number, got {} on {}",
                    self.distance_km, self.date
                ),
            });
        }
        Ok(())
    }
}

/// Date-ascending activity records for one user
///
/// Missing days are simply absent. Built fresh for every analysis call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivitySeries {
    records: Vec<ActivityRecord>,
}

impl ActivitySeries {
    /// Build a series, ordering records by date ascending
    #[must_use]
    pub fn new(mut records: Vec<ActivityRecord>) -> Self {
        records.sort_by_key(|record| record.date);
        Self { records }
    }

    /// All records, oldest first
    #[must_use]
    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the series holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records from oldest to newest
    pub fn iter(&self) -> slice::Iter<'_, ActivityRecord> {
        self.records.iter()
    }

    /// Iterate records from newest to oldest
    pub fn iter_recent_first(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.records.iter().rev()
    }

    /// Up to `count` records, newest first, after skipping the `skip` newest
    #[must_use]
    pub fn recent(&self, skip: usize, count: usize) -> Vec<&ActivityRecord> {
        self.iter_recent_first().skip(skip).take(count).collect()
    }
}

impl FromIterator<ActivityRecord> for ActivitySeries {
    fn from_iter<I: IntoIterator<Item = ActivityRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ActivitySeries {
    type Item = &'a ActivityRecord;
    type IntoIter = slice::Iter<'a, ActivityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
