// ABOUTME: Configuration error types for analytics configuration validation
// ABOUTME: Defines error variants for non-positive or non-finite goal targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Numeric value outside valid range for parameter
    #[error("Value out of range for {field}: {value}")]
    ValueOutOfRange {
        /// Parameter name
        field: &'static str,
        /// Rejected value
        value: f64,
    },
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string())
    }
}
