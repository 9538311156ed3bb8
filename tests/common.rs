// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory databases, and activity series builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
//! Shared test utilities for `pierre_predictions`

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use pierre_predictions::database::Database;
use pierre_predictions::models::{ActivityRecord, ActivitySeries};
use std::env;
use std::sync::Once;
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// A fixed Monday used as the anchor for deterministic series
pub fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
}

/// `days` consecutive records ending on `end`, all with the same values
pub fn constant_records(
    user_id: Uuid,
    end: NaiveDate,
    days: usize,
    steps: u32,
    distance_km: f64,
    active_minutes: u32,
) -> Vec<ActivityRecord> {
    (0..days)
        .map(|offset| {
            let date = end - Duration::days((days - 1 - offset) as i64);
            ActivityRecord::new(user_id, date, steps, distance_km, active_minutes)
        })
        .collect()
}

/// Consecutive records ending on `end`, one per step value (oldest first)
///
/// Distance and active minutes are derived from steps so all three metrics move together.
pub fn records_from_steps(user_id: Uuid, end: NaiveDate, steps: &[u32]) -> Vec<ActivityRecord> {
    let days = steps.len();
    steps
        .iter()
        .enumerate()
        .map(|(offset, &count)| {
            let date = end - Duration::days((days - 1 - offset) as i64);
            ActivityRecord::new(
                user_id,
                date,
                count,
                f64::from(count) / 2000.0,
                count / 300,
            )
        })
        .collect()
}

/// Series wrapper around [`records_from_steps`]
pub fn series_from_steps(end: NaiveDate, steps: &[u32]) -> ActivitySeries {
    ActivitySeries::new(records_from_steps(Uuid::new_v4(), end, steps))
}
