// ABOUTME: Fixed window lengths and thresholds used by the prediction analyzers
// ABOUTME: Sized for a consumer fitness app; deliberately not runtime-configurable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Window lengths, in calendar days or records
pub mod windows {
    /// Days of history fed to the goal predictor
    pub const GOAL_LOOKBACK_DAYS: i64 = 14;
    /// Days of history fed to the anomaly, trend, and insight analyzers
    pub const ANALYSIS_LOOKBACK_DAYS: i64 = 30;
    /// Records forming the "recent week"
    pub const RECENT_RECORDS: usize = 7;
    /// Minimum records before anomaly, trend, or insight analysis runs
    pub const MIN_RECORDS_FOR_ANALYSIS: usize = 7;
}

/// Goal likelihood scoring
pub mod goal_scoring {
    /// Upper bound for any likelihood
    pub const MAX_LIKELIHOOD: f64 = 100.0;
    /// Bonus when the recent average beats the two-week average
    pub const IMPROVING_TREND_BONUS: f64 = 10.0;
    /// Likelihood at or above which a goal is "very likely"
    pub const VERY_LIKELY_THRESHOLD: f64 = 80.0;
    /// Likelihood at or above which a goal has a "good chance"
    pub const GOOD_CHANCE_THRESHOLD: f64 = 50.0;
}

/// Anomaly detection
pub mod anomaly {
    /// Absolute z-score at which a value is flagged
    pub const Z_SCORE_THRESHOLD: f64 = 2.0;
}

/// Trend forecasting
pub mod trend {
    /// Endpoint change (percent) below which a trend is "stable"
    pub const STABLE_BAND_PERCENT: f64 = 5.0;
}

/// Insight rules
pub mod insight {
    /// Weekend average below this share of the weekday average is "lower on weekends"
    pub const WEEKEND_LOW_RATIO: f64 = 0.7;
    /// Weekend average above this share of the weekday average is "more active on weekends"
    pub const WEEKEND_HIGH_RATIO: f64 = 1.3;
    /// Coefficient of variation above which activity is "highly variable"
    pub const HIGH_VARIABILITY_CV: f64 = 0.5;
    /// Coefficient of variation below which activity is "consistent"
    pub const LOW_VARIABILITY_CV: f64 = 0.2;
    /// Share of the goal below which a consistent average is "below target"
    pub const BELOW_TARGET_RATIO: f64 = 0.7;
    /// Week-over-week change (percent) reported as progress or regression
    pub const PROGRESS_CHANGE_PERCENT: f64 = 20.0;
    /// Insights kept after all rules run
    pub const MAX_INSIGHTS: usize = 3;
}
