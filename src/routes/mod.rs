// ABOUTME: Route module organization for the prediction service HTTP endpoints
// ABOUTME: Health checks, prediction generation and retrieval, and activity import and reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to [`PredictionManager`](crate::services::PredictionManager).

/// Activity import and read routes
pub mod activities;
/// Health check routes
pub mod health;
/// Prediction routes
pub mod predictions;

pub use activities::ActivityRoutes;
pub use health::HealthRoutes;
pub use predictions::PredictionRoutes;
