// ABOUTME: Analytics engine re-exported from the pierre-intelligence crate
// ABOUTME: Statistics primitives plus goal, anomaly, trend, and insight analyzers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! The analyzers are pure; see [`crate::services::prediction_manager`] for how
//! their output is persisted.

pub use pierre_intelligence::{
    analysis_constants, ActivityAnalyzer, ActivityStatistics, AnalysisReport, AnomalyDetail,
    AnomalyDetector, AnomalyDirection, AnomalyReport, GoalPrediction, GoalPredictions,
    GoalPredictor, GoalTargets, GoalTrend, Insight, InsightGenerator, InsightReport, InsightType,
    MetricTrend, TrendDirection, TrendForecaster, TrendReport, WeeklyAggregate,
};
