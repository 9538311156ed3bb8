// ABOUTME: Core types and constants for the Pierre activity prediction service
// ABOUTME: Foundation crate with error handling, activity and prediction models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for the Pierre activity
//! prediction service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `DatabaseError`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Daily activity records, per-metric values, and stored predictions

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`ActivityRecord`, `Metric`, `Prediction`, etc.)
pub mod models;
