// ABOUTME: Activity and prediction data models re-exported from pierre-core
// ABOUTME: Records, series, metrics, and stored prediction rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pierre_core::models::{
    ActivityRecord, ActivitySeries, Metric, PerMetric, Prediction, PredictionType,
};
