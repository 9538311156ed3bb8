// ABOUTME: Configuration module organization for the prediction service
// ABOUTME: Environment-driven server settings and type-safe database URLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-only configuration. There are no config files; every setting
//! has a default and can be overridden by an environment variable or, for the
//! binary, a command-line flag.

/// Type-safe database URL parsing
pub mod database;
/// Server configuration loaded from the environment
pub mod environment;

pub use database::DatabaseUrl;
pub use environment::{Environment, LogLevel, ServerConfig};
