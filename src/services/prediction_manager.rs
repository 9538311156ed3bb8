// ABOUTME: Prediction orchestration: fetch the activity window, run an analyzer, upsert its result
// ABOUTME: Exposes one entry point per analyzer plus generate-all, which runs the four concurrently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prediction Manager
//!
//! Each entry point follows the same path:
//!
//! 1. fetch the user's records for the analyzer's lookback window ending on the
//!    prediction date
//! 2. run the analyzer; `None` means insufficient data and nothing is written
//! 3. upsert the description and serialized report under `(user, date, type)`
//!
//! [`PredictionManager::generate_all`] runs the four paths concurrently. A
//! failure in one is reported in its own [`AnalysisOutcome`] and never stops
//! the others.

use crate::database::repositories::{ActivityQuery, ActivityRepository, PredictionStore};
use crate::errors::{AppError, AppResult};
use crate::intelligence::{
    ActivityAnalyzer, AnalysisReport, AnomalyDetector, AnomalyReport, GoalPredictions,
    GoalPredictor, GoalTargets, InsightGenerator, InsightReport, TrendForecaster, TrendReport,
};
use crate::models::{ActivityRecord, ActivitySeries, Prediction, PredictionType};
use chrono::{Duration, NaiveDate, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};
use uuid::Uuid;

/// One page of a user's activity records, newest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityPage {
    /// Records on this page
    pub data: Vec<ActivityRecord>,
    /// Records matching the date range across all pages
    pub total: u64,
    /// Page size used
    pub limit: u32,
    /// Records skipped before this page
    pub offset: u32,
}

/// Stored analyzer result returned to callers
///
/// The report's fields are flattened next to the row metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResponse<R> {
    /// Stored row identifier
    pub id: Uuid,
    /// Prediction date
    pub date: NaiveDate,
    /// Human-readable summary
    pub description: String,
    /// Analyzer payload
    #[serde(flatten)]
    pub report: R,
}

/// Result of one analyzer inside [`GeneratedPredictions`]
#[derive(Debug)]
pub enum AnalysisOutcome<R> {
    /// Analyzer ran and its result was stored
    Ready(PredictionResponse<R>),
    /// Too few records; serialized as `{}`
    InsufficientData,
    /// Fetch or upsert failed
    Failed {
        /// Error message
        error: String,
    },
}

impl<R> AnalysisOutcome<R> {
    fn from_result(
        prediction_type: PredictionType,
        user_id: Uuid,
        result: AppResult<Option<PredictionResponse<R>>>,
    ) -> Self {
        match result {
            Ok(Some(response)) => Self::Ready(response),
            Ok(None) => Self::InsufficientData,
            Err(e) => {
                error!(
                    user_id = %user_id,
                    prediction_type = %prediction_type,
                    error = %e,
                    "Prediction failed during generate-all"
                );
                Self::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    /// Whether the analyzer produced and stored a result
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Whether the analyzer failed
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// The stored response, if any
    #[must_use]
    pub const fn response(&self) -> Option<&PredictionResponse<R>> {
        match self {
            Self::Ready(response) => Some(response),
            Self::InsufficientData | Self::Failed { .. } => None,
        }
    }
}

impl<R: Serialize> Serialize for AnalysisOutcome<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Ready(response) => response.serialize(serializer),
            Self::InsufficientData => serializer.serialize_map(Some(0))?.end(),
            Self::Failed { error } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", error)?;
                map.end()
            }
        }
    }
}

/// Composite result of [`PredictionManager::generate_all`]
#[derive(Debug, Serialize)]
pub struct GeneratedPredictions {
    /// Goal achievement likelihoods
    pub goal_predictions: AnalysisOutcome<GoalPredictions>,
    /// Anomalies in the past week
    pub anomalies: AnalysisOutcome<AnomalyReport>,
    /// Weekly trends and forecasts
    pub trends: AnalysisOutcome<TrendReport>,
    /// Insights
    pub insights: AnalysisOutcome<InsightReport>,
}

/// Orchestrates the four analyzers over repository-backed activity data
pub struct PredictionManager {
    activities: Arc<dyn ActivityRepository>,
    store: Arc<dyn PredictionStore>,
    goal_predictor: GoalPredictor,
    anomaly_detector: AnomalyDetector,
    trend_forecaster: TrendForecaster,
    insight_generator: InsightGenerator,
}

impl PredictionManager {
    /// Create a manager scoring against the default goals
    #[must_use]
    pub fn new(activities: Arc<dyn ActivityRepository>, store: Arc<dyn PredictionStore>) -> Self {
        Self::with_goals(activities, store, GoalTargets::default())
    }

    /// Create a manager scoring against `goals`
    #[must_use]
    pub fn with_goals(
        activities: Arc<dyn ActivityRepository>,
        store: Arc<dyn PredictionStore>,
        goals: GoalTargets,
    ) -> Self {
        Self {
            activities,
            store,
            goal_predictor: GoalPredictor::new(goals),
            anomaly_detector: AnomalyDetector::new(),
            trend_forecaster: TrendForecaster::new(),
            insight_generator: InsightGenerator::new(goals),
        }
    }

    /// Goal predictions for today
    ///
    /// # Errors
    ///
    /// Returns an error if the activity fetch or the upsert fails
    pub async fn goal_predictions(
        &self,
        user_id: Uuid,
    ) -> AppResult<Option<PredictionResponse<GoalPredictions>>> {
        self.goal_predictions_on(user_id, today()).await
    }

    /// Goal predictions for `as_of`, using the 14 days ending on it
    ///
    /// # Errors
    ///
    /// Returns an error if the activity fetch or the upsert fails
    pub async fn goal_predictions_on(
        &self,
        user_id: Uuid,
        as_of: NaiveDate,
    ) -> AppResult<Option<PredictionResponse<GoalPredictions>>> {
        self.run(&self.goal_predictor, user_id, as_of).await
    }

    /// Anomalies for today
    ///
    /// # Errors
    ///
    /// Returns an error if the activity fetch or the upsert fails
    pub async fn anomalies(&self, user_id: Uuid) -> AppResult<Option<PredictionResponse<AnomalyReport>>> {
        self.anomalies_on(user_id, today()).await
    }

    /// Anomalies for `as_of`, against the 30 days ending on it
    ///
    /// # Errors
    ///
    /// Returns an error if the activity fetch or the upsert fails
    pub async fn anomalies_on(
        &self,
        user_id: Uuid,
        as_of: NaiveDate,
    ) -> AppResult<Option<PredictionResponse<AnomalyReport>>> {
        self.run(&self.anomaly_detector, user_id, as_of).await
    }

    /// Trends for today
    ///
    /// # Errors
    ///
    /// Returns an error if the activity fetch or the upsert fails
    pub async fn trends(&self, user_id: Uuid) -> AppResult<Option<PredictionResponse<TrendReport>>> {
        self.trends_on(user_id, today()).await
    }

    /// Trends for `as_of`, over the 30 days ending on it
    ///
    /// # Errors
    ///
    /// Returns an error if the activity fetch or the upsert fails
    pub async fn trends_on(
        &self,
        user_id: Uuid,
        as_of: NaiveDate,
    ) -> AppResult<Option<PredictionResponse<TrendReport>>> {
        self.run(&self.trend_forecaster, user_id, as_of).await
    }

    /// Insights for today
    ///
    /// # Errors
    ///
    /// Returns an error if the activity fetch or the upsert fails
    pub async fn insights(&self, user_id: Uuid) -> AppResult<Option<PredictionResponse<InsightReport>>> {
        self.insights_on(user_id, today()).await
    }

    /// Insights for `as_of`, over the 30 days ending on it
    ///
    /// # Errors
    ///
    /// Returns an error if the activity fetch or the upsert fails
    pub async fn insights_on(
        &self,
        user_id: Uuid,
        as_of: NaiveDate,
    ) -> AppResult<Option<PredictionResponse<InsightReport>>> {
        self.run(&self.insight_generator, user_id, as_of).await
    }

    /// Run all four analyzers for today
    pub async fn generate_all(&self, user_id: Uuid) -> GeneratedPredictions {
        self.generate_all_on(user_id, today()).await
    }

    /// Run all four analyzers for `as_of` concurrently
    pub async fn generate_all_on(&self, user_id: Uuid, as_of: NaiveDate) -> GeneratedPredictions {
        let (goal_predictions, anomalies, trends, insights) = tokio::join!(
            self.goal_predictions_on(user_id, as_of),
            self.anomalies_on(user_id, as_of),
            self.trends_on(user_id, as_of),
            self.insights_on(user_id, as_of),
        );

        GeneratedPredictions {
            goal_predictions: AnalysisOutcome::from_result(
                PredictionType::GoalAchievement,
                user_id,
                goal_predictions,
            ),
            anomalies: AnalysisOutcome::from_result(PredictionType::Anomaly, user_id, anomalies),
            trends: AnalysisOutcome::from_result(PredictionType::Trend, user_id, trends),
            insights: AnalysisOutcome::from_result(PredictionType::Insight, user_id, insights),
        }
    }

    /// Stored predictions for a user on `date`
    ///
    /// # Errors
    ///
    /// Returns an error if the store lookup fails
    pub async fn stored_predictions(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Vec<Prediction>> {
        Ok(self.store.list_for_date(user_id, date).await?)
    }

    /// Store imported daily records for `user_id`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a record belongs to another user or fails
    /// validation, or a database error if the write fails
    pub async fn import_activities(&self, user_id: Uuid, records: &[ActivityRecord]) -> AppResult<usize> {
        if let Some(foreign) = records.iter().find(|record| record.user_id != user_id) {
            return Err(AppError::invalid_input(format!(
                "Activity for {} cannot be imported for user {user_id}",
                foreign.user_id
            )));
        }

        let stored = self.activities.upsert_activities(records).await?;
        info!(user_id = %user_id, records = stored, "Activity records imported");
        Ok(stored)
    }

    /// One page of stored activity for `user_id`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the range is inverted, or a database error
    /// if the lookup fails
    pub async fn activities(&self, user_id: Uuid, query: &ActivityQuery) -> AppResult<ActivityPage> {
        if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
            if start > end {
                return Err(AppError::invalid_input(format!(
                    "start_date {start} is after end_date {end}"
                )));
            }
        }

        let (data, total) = tokio::try_join!(
            self.activities.list_activities(user_id, query),
            self.activities.count_activities(user_id, query),
        )?;

        Ok(ActivityPage {
            data,
            total,
            limit: query.limit,
            offset: query.offset,
        })
    }

    /// The stored record for one day
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no record exists for `date`
    pub async fn activity_on(&self, user_id: Uuid, date: NaiveDate) -> AppResult<ActivityRecord> {
        self.activities
            .get_activity(user_id, date)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Activity for {date}")))
    }

    /// Regenerate every prediction for `user_id` on a background task
    ///
    /// Called after an import so stored predictions reflect the new data.
    pub fn schedule_generate_all(self: &Arc<Self>, user_id: Uuid) -> JoinHandle<GeneratedPredictions> {
        let manager = Arc::clone(self);
        tokio::spawn(async move {
            debug!(user_id = %user_id, "Regenerating predictions after import");
            manager.generate_all(user_id).await
        })
    }

    async fn run<A: ActivityAnalyzer>(
        &self,
        analyzer: &A,
        user_id: Uuid,
        as_of: NaiveDate,
    ) -> AppResult<Option<PredictionResponse<A::Report>>> {
        let prediction_type = analyzer.prediction_type();
        let since = as_of - Duration::days(analyzer.lookback_days() - 1);

        let series: ActivitySeries = self
            .activities
            .fetch_series(user_id, since)
            .await?
            .iter()
            .filter(|record| record.date <= as_of)
            .cloned()
            .collect();

        let Some(report) = analyzer.analyze(&series) else {
            debug!(
                user_id = %user_id,
                prediction_type = %prediction_type,
                records = series.len(),
                "Insufficient data, nothing stored"
            );
            return Ok(None);
        };

        let description = report.description();
        let data = serde_json::to_value(&report)?;
        let stored = self
            .store
            .upsert(user_id, as_of, prediction_type, &description, &data)
            .await?;

        info!(
            user_id = %user_id,
            prediction_type = %prediction_type,
            prediction_id = %stored.id,
            date = %as_of,
            "Prediction stored"
        );

        Ok(Some(PredictionResponse {
            id: stored.id,
            date: stored.prediction_date,
            description,
            report,
        }))
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
