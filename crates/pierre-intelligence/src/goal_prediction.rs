// ABOUTME: Goal achievement predictor comparing recent daily averages against goal targets
// ABOUTME: Scores likelihood per metric with a bonus when the last week beats the fortnight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::models::{ActivitySeries, Metric, PerMetric, PredictionType};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis_constants::{goal_scoring, windows};
use crate::analyzer::{ActivityAnalyzer, AnalysisReport};
use crate::config::GoalTargets;
use crate::statistics::ActivityStatistics;

/// Direction of the recent week relative to the whole window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalTrend {
    /// Recent average is above the window average
    Improving,
    /// Recent average is at or below the window average
    StableOrDeclining,
}

/// Likelihood of meeting one metric's goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalPrediction {
    /// Daily target
    pub goal: f64,
    /// Average over the most recent week of records
    pub current_average: f64,
    /// Likelihood percentage in `[0, 100]`
    pub likelihood: f64,
    /// Recent direction
    pub trend: GoalTrend,
}

/// Goal predictions for every metric plus the averages behind them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalPredictions {
    /// Per-metric likelihoods
    pub predictions: PerMetric<GoalPrediction>,
    /// Averages over the whole lookback window
    pub averages: PerMetric<f64>,
    /// Averages over the most recent week of records
    pub recent_averages: PerMetric<f64>,
}

impl AnalysisReport for GoalPredictions {
    fn description(&self) -> String {
        self.predictions
            .iter()
            .map(|(metric, prediction)| describe_likelihood(metric, prediction.likelihood))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn describe_likelihood(metric: Metric, likelihood: f64) -> String {
    let name = metric.display_name();
    if likelihood >= goal_scoring::VERY_LIKELY_THRESHOLD {
        format!("You're very likely to meet your {name} goal.")
    } else if likelihood >= goal_scoring::GOOD_CHANCE_THRESHOLD {
        format!("You have a good chance of meeting your {name} goal.")
    } else {
        format!("You may have difficulty meeting your {name} goal.")
    }
}

/// Predicts how likely the user is to hit each daily goal
#[derive(Debug, Clone, Default)]
pub struct GoalPredictor {
    goals: GoalTargets,
}

impl GoalPredictor {
    /// Create a predictor scoring against `goals`
    #[must_use]
    pub const fn new(goals: GoalTargets) -> Self {
        Self { goals }
    }

    /// Score one metric
    ///
    /// `base = min(100, recent / goal * 100)`, plus a bonus of 10 when the recent
    /// average beats the window average, capped at 100.
    #[must_use]
    pub fn predict(&self, metric: Metric, window_average: f64, recent_average: f64) -> GoalPrediction {
        let goal = self.goals.goal(metric);
        let base = (recent_average / goal * 100.0).min(goal_scoring::MAX_LIKELIHOOD);

        let improving = recent_average > window_average;
        let bonus = if improving {
            goal_scoring::IMPROVING_TREND_BONUS
        } else {
            0.0
        };

        GoalPrediction {
            goal,
            current_average: recent_average,
            likelihood: (base + bonus).min(goal_scoring::MAX_LIKELIHOOD),
            trend: if improving {
                GoalTrend::Improving
            } else {
                GoalTrend::StableOrDeclining
            },
        }
    }
}

impl ActivityAnalyzer for GoalPredictor {
    type Report = GoalPredictions;

    fn prediction_type(&self) -> PredictionType {
        PredictionType::GoalAchievement
    }

    fn lookback_days(&self) -> i64 {
        windows::GOAL_LOOKBACK_DAYS
    }

    fn analyze(&self, series: &ActivitySeries) -> Option<GoalPredictions> {
        if series.is_empty() {
            debug!("No activity records, skipping goal predictions");
            return None;
        }

        let averages = ActivityStatistics::averages(series);
        let recent = series.recent(0, windows::RECENT_RECORDS);
        let recent_averages = ActivityStatistics::averages(recent.iter().copied());

        let predictions = PerMetric::from_fn(|metric| {
            self.predict(
                metric,
                averages.value(metric),
                recent_averages.value(metric),
            )
        });

        Some(GoalPredictions {
            predictions,
            averages,
            recent_averages,
        })
    }
}
