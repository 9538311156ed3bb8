// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for service identity, environment defaults, and storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Analytics thresholds live next to the algorithms in `pierre-intelligence`;
//! this module only holds values shared by the service plumbing.

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the prediction server
    pub const PIERRE_PREDICTIONS: &str = "pierre-predictions";
}

/// Environment variable names read at startup
pub mod env_vars {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP listen address
    pub const HOST: &str = "HOST";
    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Application log level
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

/// Defaults applied when the environment is silent
pub mod defaults {
    /// Default HTTP listen port
    pub const HTTP_PORT: u16 = 8081;
    /// Default HTTP listen address
    pub const HOST: &str = "127.0.0.1";
    /// Default `SQLite` database location
    pub const DATABASE_URL: &str = "sqlite:./data/predictions.db";
}

/// Pagination bounds for activity listings
pub mod limits {
    /// Records per page when the caller gives no `limit`
    pub const DEFAULT_ACTIVITY_PAGE_SIZE: u32 = 15;
    /// Largest accepted `limit`
    pub const MAX_ACTIVITY_PAGE_SIZE: u32 = 100;
}

/// Storage-level constants
pub mod database {
    /// Date column format used for `TEXT` date storage
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}
