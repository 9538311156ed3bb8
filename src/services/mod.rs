// ABOUTME: Service layer for business logic that sits between routes and storage
// ABOUTME: Hosts the prediction orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Fetch, analyze, and store predictions
pub mod prediction_manager;

pub use prediction_manager::{
    ActivityPage, AnalysisOutcome, GeneratedPredictions, PredictionManager, PredictionResponse,
};
