// ABOUTME: Shared contract implemented by the goal, anomaly, trend, and insight analyzers
// ABOUTME: An analyzer maps an activity series to a typed, describable report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::models::{ActivitySeries, PredictionType};
use serde::Serialize;

/// Analyzer output that can be stored as a prediction
pub trait AnalysisReport: Serialize + Send + Sync {
    /// Human-readable summary stored alongside the structured payload
    fn description(&self) -> String;
}

/// A pure analysis over one user's recent activity
///
/// Implementations never touch storage. The caller fetches a series covering
/// [`lookback_days`](Self::lookback_days) and persists whatever
/// [`analyze`](Self::analyze) returns under [`prediction_type`](Self::prediction_type).
pub trait ActivityAnalyzer: Send + Sync {
    /// Report produced on success
    type Report: AnalysisReport;

    /// Discriminator for the stored prediction row
    fn prediction_type(&self) -> PredictionType;

    /// Calendar days of history the analyzer expects, ending on the prediction date
    fn lookback_days(&self) -> i64;

    /// Run the analysis; `None` means the series is too short to say anything
    fn analyze(&self, series: &ActivitySeries) -> Option<Self::Report>;
}
