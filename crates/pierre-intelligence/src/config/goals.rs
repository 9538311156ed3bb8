// ABOUTME: Immutable daily goal targets for steps, distance, and active minutes
// ABOUTME: Passed explicitly into the goal predictor and the consistency insight rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::models::{Metric, PerMetric};
use serde::Serialize;

use super::ConfigError;

/// Default daily step goal
pub const DEFAULT_STEPS_GOAL: f64 = 10_000.0;
/// Default daily distance goal in kilometres
pub const DEFAULT_DISTANCE_KM_GOAL: f64 = 5.0;
/// Default daily active minutes goal
pub const DEFAULT_ACTIVE_MINUTES_GOAL: f64 = 30.0;

/// Daily goal per metric
///
/// Always strictly positive, so ratios against a goal never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalTargets(PerMetric<f64>);

impl GoalTargets {
    /// Build targets, rejecting non-positive or non-finite goals
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for the first invalid goal
    pub fn new(steps: f64, distance_km: f64, active_minutes: f64) -> Result<Self, ConfigError> {
        let goals = PerMetric {
            steps,
            distance_km,
            active_minutes,
        };
        for (metric, &value) in goals.iter() {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange {
                    field: metric.as_str(),
                    value,
                });
            }
        }
        Ok(Self(goals))
    }

    /// Goal for `metric`
    #[must_use]
    pub const fn goal(&self, metric: Metric) -> f64 {
        self.0.value(metric)
    }
}

impl Default for GoalTargets {
    fn default() -> Self {
        Self(PerMetric {
            steps: DEFAULT_STEPS_GOAL,
            distance_km: DEFAULT_DISTANCE_KM_GOAL,
            active_minutes: DEFAULT_ACTIVE_MINUTES_GOAL,
        })
    }
}
