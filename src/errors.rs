// ABOUTME: Unified error handling re-exported from pierre-core
// ABOUTME: AppError, ErrorCode, and DatabaseError shared by every layer of the service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! The error types are defined in `pierre-core` so the analytics crate and the
//! service share one taxonomy. With the `http-response` feature enabled,
//! [`AppError`] renders as `{"error": {"code", "message"}}` with the mapped status.

pub use pierre_core::errors::{
    AppError, AppResult, DatabaseError, ErrorCode, ErrorResponse, ErrorResponseDetails,
};
