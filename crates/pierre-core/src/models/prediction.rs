// ABOUTME: Persisted prediction row and the prediction type discriminator
// ABOUTME: A prediction is unique per (user, prediction date, prediction type)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::AppError;

/// Kind of analyzer output stored in a prediction row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionType {
    /// Likelihood of meeting daily goals
    GoalAchievement,
    /// Outlier days in the past week
    Anomaly,
    /// Weekly trend and next-week forecast
    Trend,
    /// Rule-based observations
    Insight,
}

impl PredictionType {
    /// Every prediction type
    pub const ALL: [Self; 4] = [Self::GoalAchievement, Self::Anomaly, Self::Trend, Self::Insight];

    /// Storage key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GoalAchievement => "goal_achievement",
            Self::Anomaly => "anomaly",
            Self::Trend => "trend",
            Self::Insight => "insight",
        }
    }
}

impl fmt::Display for PredictionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredictionType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "goal_achievement" => Ok(Self::GoalAchievement),
            "anomaly" => Ok(Self::Anomaly),
            "trend" => Ok(Self::Trend),
            "insight" => Ok(Self::Insight),
            other => Err(AppError::invalid_format(format!(
                "Unknown prediction type: {other}"
            ))),
        }
    }
}

/// Stored analyzer result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Row identifier, stable across updates of the same key
    pub id: Uuid,
    /// Owner
    pub user_id: Uuid,
    /// Day the prediction was generated for
    pub prediction_date: NaiveDate,
    /// Analyzer that produced it
    pub prediction_type: PredictionType,
    /// Human-readable summary
    pub description: String,
    /// Structured analyzer payload
    pub prediction_data: serde_json::Value,
    /// First write
    pub created_at: DateTime<Utc>,
    /// Most recent write
    pub updated_at: DateTime<Utc>,
}
