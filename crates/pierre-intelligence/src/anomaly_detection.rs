// ABOUTME: Z-score anomaly detection over the most recent week of activity
// ABOUTME: Flags metric values at least two standard deviations from the 30-day baseline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use pierre_core::models::{ActivitySeries, Metric, PerMetric, PredictionType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::analysis_constants::{anomaly, windows};
use crate::analyzer::{ActivityAnalyzer, AnalysisReport};
use crate::statistics::ActivityStatistics;

/// Which side of the baseline an anomalous value lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyDirection {
    /// Above the baseline mean
    Higher,
    /// Below the baseline mean
    Lower,
}

/// One flagged metric value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyDetail {
    /// Observed value
    pub value: f64,
    /// Baseline mean
    pub average: f64,
    /// Standard deviations from the mean
    pub z_score: f64,
    /// Side of the mean
    pub direction: AnomalyDirection,
}

/// Flagged days with the baseline used to flag them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyReport {
    /// Flagged metrics keyed by date; a date appears only if at least one metric was flagged
    pub anomalies: BTreeMap<NaiveDate, BTreeMap<Metric, AnomalyDetail>>,
    /// Baseline means over the whole window
    pub averages: PerMetric<f64>,
    /// Baseline population standard deviations over the whole window
    pub std_deviations: PerMetric<f64>,
}

impl AnomalyReport {
    /// Whether `metric` was flagged on `date`
    #[must_use]
    pub fn is_flagged(&self, date: NaiveDate, metric: Metric) -> bool {
        self.anomalies
            .get(&date)
            .is_some_and(|metrics| metrics.contains_key(&metric))
    }
}

impl AnalysisReport for AnomalyReport {
    fn description(&self) -> String {
        let mut dates = self.anomalies.keys();
        match (self.anomalies.len(), dates.next()) {
            (1, Some(date)) => format!("Unusual activity detected on {}.", date.format("%B %-d")),
            (0, _) | (_, None) => "No unusual activity patterns detected in the past week.".to_owned(),
            (count, _) => {
                format!("Unusual activity patterns detected on {count} days in the past week.")
            }
        }
    }
}

/// Flags outliers in the most recent week against a 30-day baseline
#[derive(Debug, Clone, Copy, Default)]
pub struct AnomalyDetector;

impl AnomalyDetector {
    /// Create a detector
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ActivityAnalyzer for AnomalyDetector {
    type Report = AnomalyReport;

    fn prediction_type(&self) -> PredictionType {
        PredictionType::Anomaly
    }

    fn lookback_days(&self) -> i64 {
        windows::ANALYSIS_LOOKBACK_DAYS
    }

    fn analyze(&self, series: &ActivitySeries) -> Option<AnomalyReport> {
        if series.len() < windows::MIN_RECORDS_FOR_ANALYSIS {
            debug!(
                records = series.len(),
                required = windows::MIN_RECORDS_FOR_ANALYSIS,
                "Not enough records for anomaly detection"
            );
            return None;
        }

        let averages = ActivityStatistics::averages(series);
        let std_deviations = ActivityStatistics::std_deviations(series, &averages);

        let mut anomalies = BTreeMap::new();
        for record in series.recent(0, windows::RECENT_RECORDS) {
            let flagged: BTreeMap<Metric, AnomalyDetail> = Metric::ALL
                .into_iter()
                .filter_map(|metric| {
                    let value = record.value(metric);
                    let average = averages.value(metric);
                    let z_score = ActivityStatistics::z_score(
                        value,
                        average,
                        std_deviations.value(metric),
                    );

                    (z_score.abs() >= anomaly::Z_SCORE_THRESHOLD).then_some((
                        metric,
                        AnomalyDetail {
                            value,
                            average,
                            z_score,
                            direction: if z_score > 0.0 {
                                AnomalyDirection::Higher
                            } else {
                                AnomalyDirection::Lower
                            },
                        },
                    ))
                })
                .collect();

            if !flagged.is_empty() {
                anomalies.insert(record.date, flagged);
            }
        }

        Some(AnomalyReport {
            anomalies,
            averages,
            std_deviations,
        })
    }
}
