// ABOUTME: Tests for weekly aggregation, trend classification, and next-week forecasts
// ABOUTME: Covers ISO week grouping across a year boundary and the non-negative forecast floor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, NaiveDate};
use common::{anchor_date, series_from_steps};
use pierre_predictions::intelligence::{
    ActivityAnalyzer, AnalysisReport, TrendDirection, TrendForecaster,
};
use pierre_predictions::models::{Metric, PredictionType};

/// Four full ISO weeks (Monday 2025-03-03 through Sunday 2025-03-30), one value per week
fn weekly_steps(values: [u32; 4]) -> Vec<u32> {
    values.iter().flat_map(|&value| [value; 7]).collect()
}

fn four_week_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 30).unwrap()
}

#[test]
fn test_rising_weeks_trend_upward() {
    let series = series_from_steps(four_week_end(), &weekly_steps([1000, 2000, 3000, 4000]));
    let report = TrendForecaster::new().analyze(&series).unwrap();

    assert_eq!(report.weekly_data.len(), 4);
    assert!(report.weekly_data.iter().all(|week| week.count == 7));
    assert_eq!(report.weekly_data[0].week_index, 10);

    let steps = report.trends.get(Metric::Steps);
    assert_eq!(steps.slope, 1000.0);
    assert_eq!(steps.percentage_change, 300.0);
    assert_eq!(steps.direction, TrendDirection::Increasing);
    assert_eq!(report.forecasts.steps, 5000.0);

    assert!(report
        .description()
        .starts_with("Your steps are trending upward. Next week's forecast: approximately 5000."));
}

#[test]
fn test_falling_weeks_forecast_is_floored_at_zero() {
    let series = series_from_steps(four_week_end(), &weekly_steps([4000, 3000, 2000, 500]));
    let report = TrendForecaster::new().analyze(&series).unwrap();

    let steps = report.trends.get(Metric::Steps);
    assert_eq!(steps.direction, TrendDirection::Decreasing);
    assert!(steps.slope < -500.0);
    assert_eq!(report.forecasts.steps, 0.0);
    assert!(report.description().contains("trending downward"));
}

#[test]
fn test_small_change_is_stable() {
    let series = series_from_steps(four_week_end(), &weekly_steps([5000, 5000, 5000, 5100]));
    let report = TrendForecaster::new().analyze(&series).unwrap();

    assert_eq!(report.trends.get(Metric::Steps).direction, TrendDirection::Stable);
    assert!(report.description().starts_with("Your steps are stable."));
}

#[test]
fn test_slope_and_direction_may_disagree() {
    // Endpoints within 5% while the middle weeks pull the regression upward
    let series = series_from_steps(four_week_end(), &weekly_steps([1000, 3000, 5000, 1020]));
    let steps = TrendForecaster::new()
        .analyze(&series)
        .unwrap()
        .trends
        .steps;

    assert_eq!(steps.direction, TrendDirection::Stable);
    assert!((steps.slope - 206.0).abs() < 1e-9);
}

#[test]
fn test_regression_slope_on_weekly_values() {
    let weekly: Vec<u32> = [100, 200, 300, 400]
        .iter()
        .flat_map(|&value| [value; 7])
        .collect();
    let series = series_from_steps(four_week_end(), &weekly);
    let weeks = TrendForecaster::aggregate_weekly(&series);

    let trend = TrendForecaster::metric_trend(&weeks, Metric::Steps);
    assert_eq!(trend.slope, 100.0);
    assert_eq!(trend.percentage_change, 300.0);
}

#[test]
fn test_iso_weeks_across_year_boundary_stay_ordered() {
    // 2024-12-23..29 is ISO 2024-W52, 2024-12-30..2025-01-05 is ISO 2025-W01
    let end = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
    let mut steps = vec![3000; 7];
    steps.extend([6000; 7]);
    let series = series_from_steps(end, &steps);

    let weeks = TrendForecaster::aggregate_weekly(&series);

    assert_eq!(weeks.len(), 2);
    assert_eq!((weeks[0].iso_year, weeks[0].week_index), (2024, 52));
    assert_eq!((weeks[1].iso_year, weeks[1].week_index), (2025, 1));
    assert_eq!(weeks[0].steps, 3000.0);
    assert_eq!(weeks[1].steps, 6000.0);
}

#[test]
fn test_partial_weeks_average_their_own_records() {
    // Ten days ending Wednesday 2025-03-12: Monday-Sunday plus Monday-Wednesday
    let end = anchor_date() + Duration::days(9);
    let mut steps = vec![2000; 7];
    steps.extend([4000, 5000, 6000]);
    let weeks = TrendForecaster::aggregate_weekly(&series_from_steps(end, &steps));

    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[1].count, 3);
    assert_eq!(weeks[1].steps, 5000.0);
}

#[test]
fn test_forecast_never_negative() {
    assert_eq!(TrendForecaster::forecast(100.0, -300.0), 0.0);
    assert_eq!(TrendForecaster::forecast(100.0, 50.0), 150.0);
}

#[test]
fn test_fewer_than_seven_records_yields_none() {
    let series = series_from_steps(anchor_date(), &[1000; 6]);
    assert!(TrendForecaster::new().analyze(&series).is_none());
}

#[test]
fn test_analyzer_metadata() {
    let forecaster = TrendForecaster::new();
    assert_eq!(forecaster.prediction_type(), PredictionType::Trend);
    assert_eq!(forecaster.lookback_days(), 30);
}
