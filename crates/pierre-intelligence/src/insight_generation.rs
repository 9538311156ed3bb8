// ABOUTME: Rule-based insight generation from a month of daily activity
// ABOUTME: Weekday/weekend split, day-to-day consistency, and week-over-week progress rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Three independent rule passes run in a fixed order and their findings are
//! concatenated; only the first [`MAX_INSIGHTS`](crate::analysis_constants::insight::MAX_INSIGHTS)
//! are kept.

use chrono::{Datelike, Weekday};
use pierre_core::models::{ActivityRecord, ActivitySeries, Metric, PredictionType};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::analysis_constants::{insight, windows};
use crate::analyzer::{ActivityAnalyzer, AnalysisReport};
use crate::config::GoalTargets;
use crate::statistics::ActivityStatistics;

/// Rule family that produced an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    /// Weekday versus weekend comparison
    WeekdayPattern,
    /// Day-to-day variability
    Consistency,
    /// Last week versus the week before
    Progress,
}

/// A single observation about the user's activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Rule family
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    /// Message shown to the user
    pub message: String,
    /// Numbers behind the message
    pub data: serde_json::Value,
}

/// Selected insights, at most three
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    /// Insights in rule order
    pub insights: Vec<Insight>,
}

impl AnalysisReport for InsightReport {
    fn description(&self) -> String {
        if self.insights.is_empty() {
            return "Not enough data yet to generate personalized insights.".to_owned();
        }
        self.insights
            .iter()
            .map(|insight| insight.message.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Generates human-readable observations about activity habits
#[derive(Debug, Clone, Default)]
pub struct InsightGenerator {
    goals: GoalTargets,
}

impl InsightGenerator {
    /// Create a generator that judges consistency against `goals`
    #[must_use]
    pub const fn new(goals: GoalTargets) -> Self {
        Self { goals }
    }

    /// Compare weekend and weekday averages per metric
    #[must_use]
    pub fn weekday_patterns(series: &ActivitySeries) -> Vec<Insight> {
        let (weekend, weekday): (Vec<&ActivityRecord>, Vec<&ActivityRecord>) =
            series.iter().partition(|record| is_weekend(record));

        let weekday_averages = ActivityStatistics::averages(weekday.iter().copied());
        let weekend_averages = ActivityStatistics::averages(weekend.iter().copied());

        Metric::ALL
            .into_iter()
            .filter_map(|metric| {
                let weekday_average = weekday_averages.value(metric);
                let weekend_average = weekend_averages.value(metric);
                let name = metric.display_name();

                let message = if weekend_average < weekday_average * insight::WEEKEND_LOW_RATIO {
                    format!(
                        "Your {name} are significantly lower on weekends. Consider planning active weekend activities to maintain consistency."
                    )
                } else if weekend_average > weekday_average * insight::WEEKEND_HIGH_RATIO {
                    "You're much more active on weekends than weekdays. Try to incorporate more activity into your work days."
                        .to_owned()
                } else {
                    return None;
                };

                Some(Insight {
                    insight_type: InsightType::WeekdayPattern,
                    message,
                    data: json!({
                        "metric": metric,
                        "weekday_average": weekday_average,
                        "weekend_average": weekend_average,
                    }),
                })
            })
            .collect()
    }

    /// Judge day-to-day variability per metric with the coefficient of variation
    ///
    /// At most one finding per metric: high variability first, then
    /// consistently below target, then consistently meeting the goal.
    #[must_use]
    pub fn consistency(&self, series: &ActivitySeries) -> Vec<Insight> {
        let averages = ActivityStatistics::averages(series);
        let std_deviations = ActivityStatistics::std_deviations(series, &averages);

        Metric::ALL
            .into_iter()
            .filter_map(|metric| {
                let average = averages.value(metric);
                let std_deviation = std_deviations.value(metric);
                let goal = self.goals.goal(metric);
                let cv = ActivityStatistics::coefficient_of_variation(std_deviation, average);
                let name = metric.display_name();

                let (message, data) = if cv > insight::HIGH_VARIABILITY_CV {
                    (
                        format!(
                            "Your {name} vary significantly from day to day. Aim for more consistent activity levels throughout the week."
                        ),
                        json!({
                            "metric": metric,
                            "average": average,
                            "std_deviation": std_deviation,
                            "variation_coefficient": cv,
                        }),
                    )
                } else if cv < insight::LOW_VARIABILITY_CV
                    && average < goal * insight::BELOW_TARGET_RATIO
                {
                    (
                        format!(
                            "You're consistently below target for {name}. Try gradually increasing your daily activity."
                        ),
                        json!({
                            "metric": metric,
                            "average": average,
                            "recommended": goal,
                            "variation_coefficient": cv,
                        }),
                    )
                } else if cv < insight::LOW_VARIABILITY_CV && average >= goal {
                    (
                        format!(
                            "Great job maintaining consistent {name}! You're consistently meeting or exceeding goals."
                        ),
                        json!({
                            "metric": metric,
                            "average": average,
                            "recommended": goal,
                            "variation_coefficient": cv,
                        }),
                    )
                } else {
                    return None;
                };

                Some(Insight {
                    insight_type: InsightType::Consistency,
                    message,
                    data,
                })
            })
            .collect()
    }

    /// Compare the newest seven records with the seven before them
    ///
    /// A metric whose previous average is zero is skipped.
    #[must_use]
    pub fn progress(series: &ActivitySeries) -> Vec<Insight> {
        let recent = series.recent(0, windows::RECENT_RECORDS);
        let previous = series.recent(windows::RECENT_RECORDS, windows::RECENT_RECORDS);

        let recent_averages = ActivityStatistics::averages(recent.iter().copied());
        let previous_averages = ActivityStatistics::averages(previous.iter().copied());

        Metric::ALL
            .into_iter()
            .filter_map(|metric| {
                let recent_average = recent_averages.value(metric);
                let previous_average = previous_averages.value(metric);
                if previous_average <= 0.0 {
                    return None;
                }

                let change_percent =
                    ActivityStatistics::percentage_change(previous_average, recent_average);
                let name = metric.display_name();

                let message = if change_percent >= insight::PROGRESS_CHANGE_PERCENT {
                    format!(
                        "Great improvement! Your {name} have increased by {}% compared to the previous week.",
                        change_percent.round()
                    )
                } else if change_percent <= -insight::PROGRESS_CHANGE_PERCENT {
                    format!(
                        "Your {name} have decreased by {}% compared to the previous week. Try to get back on track!",
                        change_percent.abs().round()
                    )
                } else {
                    return None;
                };

                Some(Insight {
                    insight_type: InsightType::Progress,
                    message,
                    data: json!({
                        "metric": metric,
                        "recent_average": recent_average,
                        "previous_average": previous_average,
                        "change_percent": change_percent,
                    }),
                })
            })
            .collect()
    }
}

fn is_weekend(record: &ActivityRecord) -> bool {
    matches!(record.date.weekday(), Weekday::Sat | Weekday::Sun)
}

impl ActivityAnalyzer for InsightGenerator {
    type Report = InsightReport;

    fn prediction_type(&self) -> PredictionType {
        PredictionType::Insight
    }

    fn lookback_days(&self) -> i64 {
        windows::ANALYSIS_LOOKBACK_DAYS
    }

    fn analyze(&self, series: &ActivitySeries) -> Option<InsightReport> {
        if series.len() < windows::MIN_RECORDS_FOR_ANALYSIS {
            debug!(
                records = series.len(),
                required = windows::MIN_RECORDS_FOR_ANALYSIS,
                "Not enough records for insight generation"
            );
            return None;
        }

        let insights = Self::weekday_patterns(series)
            .into_iter()
            .chain(self.consistency(series))
            .chain(Self::progress(series))
            .take(insight::MAX_INSIGHTS)
            .collect();

        Some(InsightReport { insights })
    }
}
