// ABOUTME: Weekly trend analysis and next-week forecast for each activity metric
// ABOUTME: Aggregates by ISO week, fits an OLS slope, and classifies direction by endpoint change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: at most a handful of records per week

use chrono::Datelike;
use pierre_core::models::{ActivitySeries, Metric, PerMetric, PredictionType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::analysis_constants::{trend, windows};
use crate::analyzer::{ActivityAnalyzer, AnalysisReport};
use crate::statistics::ActivityStatistics;

/// Direction of a weekly trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Last week is at least 5% above the first
    Increasing,
    /// Last week is at least 5% below the first
    Decreasing,
    /// Endpoints within 5% of each other
    Stable,
}

/// Per-metric means of all records within one ISO week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAggregate {
    /// ISO week-numbering year
    pub iso_year: i32,
    /// ISO week number (1-53)
    pub week_index: u32,
    /// Mean daily steps
    pub steps: f64,
    /// Mean daily distance in kilometres
    pub distance_km: f64,
    /// Mean daily active minutes
    pub active_minutes: f64,
    /// Records in the week
    pub count: usize,
}

impl WeeklyAggregate {
    /// Mean of `metric` for the week
    #[must_use]
    pub const fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Steps => self.steps,
            Metric::DistanceKm => self.distance_km,
            Metric::ActiveMinutes => self.active_minutes,
        }
    }
}

/// Weekly trend for one metric
///
/// `slope` comes from a regression over every week while `direction` and
/// `percentage_change` compare only the first and last week, so the two can
/// disagree for a V-shaped series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricTrend {
    /// OLS slope per week
    pub slope: f64,
    /// Endpoint direction
    pub direction: TrendDirection,
    /// Change from first to last week, percent
    pub percentage_change: f64,
}

/// Trends, forecasts, and the weekly data they were computed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    /// Per-metric trend
    pub trends: PerMetric<MetricTrend>,
    /// Next-week forecast per metric, never negative
    pub forecasts: PerMetric<f64>,
    /// Weekly aggregates, oldest first
    pub weekly_data: Vec<WeeklyAggregate>,
}

impl AnalysisReport for TrendReport {
    fn description(&self) -> String {
        self.trends
            .iter()
            .map(|(metric, metric_trend)| {
                let heading = match metric_trend.direction {
                    TrendDirection::Increasing => "trending upward",
                    TrendDirection::Decreasing => "trending downward",
                    TrendDirection::Stable => "stable",
                };
                format!(
                    "Your {} are {heading}. Next week's forecast: approximately {}.",
                    metric.display_name(),
                    self.forecasts.value(metric).round()
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Forecasts next week's activity from weekly averages
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendForecaster;

impl TrendForecaster {
    /// Create a forecaster
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Group records by ISO week and average each metric, oldest week first
    #[must_use]
    pub fn aggregate_weekly(series: &ActivitySeries) -> Vec<WeeklyAggregate> {
        let mut weeks: BTreeMap<(i32, u32), (PerMetric<f64>, usize)> = BTreeMap::new();

        for record in series {
            let iso = record.date.iso_week();
            let (totals, count) = weeks
                .entry((iso.year(), iso.week()))
                .or_insert_with(|| (PerMetric::default(), 0));
            *totals = totals.map(|metric, total| total + record.value(metric));
            *count += 1;
        }

        weeks
            .into_iter()
            .map(|((iso_year, week_index), (totals, count))| {
                let divisor = count as f64;
                WeeklyAggregate {
                    iso_year,
                    week_index,
                    steps: totals.steps / divisor,
                    distance_km: totals.distance_km / divisor,
                    active_minutes: totals.active_minutes / divisor,
                    count,
                }
            })
            .collect()
    }

    /// Slope, endpoint change, and direction for one metric
    #[must_use]
    pub fn metric_trend(weekly: &[WeeklyAggregate], metric: Metric) -> MetricTrend {
        let values: Vec<f64> = weekly.iter().map(|week| week.value(metric)).collect();
        let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
            return MetricTrend {
                slope: 0.0,
                direction: TrendDirection::Stable,
                percentage_change: 0.0,
            };
        };

        let percentage_change = ActivityStatistics::percentage_change(first, last);
        let direction = if percentage_change.abs() < trend::STABLE_BAND_PERCENT {
            TrendDirection::Stable
        } else if percentage_change > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        };

        MetricTrend {
            slope: ActivityStatistics::linear_regression_slope(&values),
            direction,
            percentage_change,
        }
    }

    /// Last week's value plus one slope step, floored at zero
    #[must_use]
    pub fn forecast(last_week_value: f64, slope: f64) -> f64 {
        (last_week_value + slope).max(0.0)
    }
}

impl ActivityAnalyzer for TrendForecaster {
    type Report = TrendReport;

    fn prediction_type(&self) -> PredictionType {
        PredictionType::Trend
    }

    fn lookback_days(&self) -> i64 {
        windows::ANALYSIS_LOOKBACK_DAYS
    }

    fn analyze(&self, series: &ActivitySeries) -> Option<TrendReport> {
        if series.len() < windows::MIN_RECORDS_FOR_ANALYSIS {
            debug!(
                records = series.len(),
                required = windows::MIN_RECORDS_FOR_ANALYSIS,
                "Not enough records for trend forecasting"
            );
            return None;
        }

        let weekly_data = Self::aggregate_weekly(series);
        let trends = PerMetric::from_fn(|metric| Self::metric_trend(&weekly_data, metric));
        let forecasts = PerMetric::from_fn(|metric| {
            let last = weekly_data.last().map_or(0.0, |week| week.value(metric));
            Self::forecast(last, trends.get(metric).slope)
        });

        Some(TrendReport {
            trends,
            forecasts,
            weekly_data,
        })
    }
}
