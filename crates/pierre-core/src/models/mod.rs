// ABOUTME: Core data models for the Pierre activity prediction service
// ABOUTME: Re-exports daily activity records, per-metric containers, and stored predictions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `ActivityRecord`: one user's step count, distance and active minutes for a calendar day
//! - `ActivitySeries`: date-ordered records for one user, built fresh for each analysis
//! - `Metric` / `PerMetric`: the three tracked metrics and a container keyed by them
//! - `Prediction`: a persisted analyzer result, unique per user, date and type

mod activity;
mod metric;
mod prediction;

pub use activity::{ActivityRecord, ActivitySeries};
pub use metric::{Metric, PerMetric};
pub use prediction::{Prediction, PredictionType};
