// ABOUTME: Configuration module for pierre-intelligence crate
// ABOUTME: Re-exports the immutable goal targets and their validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration validation errors
pub mod error;
/// Daily goal targets shared by the goal predictor and insight rules
pub mod goals;

pub use error::ConfigError;
pub use goals::GoalTargets;
