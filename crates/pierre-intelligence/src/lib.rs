// ABOUTME: Activity analytics engine for goal, anomaly, trend, and insight predictions
// ABOUTME: Pure computations over an ActivitySeries; persistence is left to the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Intelligence
//!
//! Statistics primitives and the four analyzers that turn a user's recent daily
//! activity into predictions:
//!
//! - [`GoalPredictor`]: likelihood of meeting each daily goal
//! - [`AnomalyDetector`]: z-score outliers among the last seven records
//! - [`TrendForecaster`]: weekly regression with a next-week forecast
//! - [`InsightGenerator`]: weekday/weekend, consistency, and progress observations
//!
//! Every analyzer implements [`ActivityAnalyzer`]. An analyzer returns `None`
//! when the series is too short; that is a normal outcome, not an error.

/// Fixed analysis thresholds and window lengths
pub mod analysis_constants;
/// The shared analyzer contract
pub mod analyzer;
/// Z-score anomaly detection
pub mod anomaly_detection;
/// Immutable goal configuration
pub mod config;
/// Goal achievement likelihood
pub mod goal_prediction;
/// Rule-based insight generation
pub mod insight_generation;
/// Mean, deviation, z-score, regression slope, percentage change
pub mod statistics;
/// Weekly aggregation and forecasting
pub mod trend_forecast;

pub use analyzer::{ActivityAnalyzer, AnalysisReport};
pub use anomaly_detection::{AnomalyDetail, AnomalyDetector, AnomalyDirection, AnomalyReport};
pub use config::GoalTargets;
pub use goal_prediction::{GoalPrediction, GoalPredictions, GoalPredictor, GoalTrend};
pub use insight_generation::{Insight, InsightGenerator, InsightReport, InsightType};
pub use statistics::ActivityStatistics;
pub use trend_forecast::{MetricTrend, TrendDirection, TrendForecaster, TrendReport, WeeklyAggregate};
