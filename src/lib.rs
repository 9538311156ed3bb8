// ABOUTME: Main library entry point for the Pierre activity prediction service
// ABOUTME: Wires configuration, logging, SQLite persistence, orchestration, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Predictions
//!
//! Derives four kinds of prediction from a user's daily activity (steps,
//! distance, active minutes):
//!
//! - **Goal achievement**: likelihood of meeting each daily goal
//! - **Anomalies**: unusual days in the most recent week
//! - **Trends**: weekly direction with a next-week forecast
//! - **Insights**: short observations about habits
//!
//! The analytics live in `pierre-intelligence` and are pure. This crate fetches
//! the activity window, runs the analyzers, and upserts one row per
//! `(user, date, type)`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_predictions::config::environment::ServerConfig;
//! use pierre_predictions::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Pierre predictions configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Shared constants
pub mod constants;

/// `SQLite` persistence and repository seams
pub mod database;

/// Unified error handling
pub mod errors;

/// Analytics engine re-exports
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Activity and prediction models
pub mod models;

/// HTTP route definitions
pub mod routes;

/// HTTP server assembly and shared resources
pub mod server;

/// Orchestration services
pub mod services;
