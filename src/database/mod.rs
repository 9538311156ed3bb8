// ABOUTME: SQLite database manager for activity records and stored predictions
// ABOUTME: Owns the connection pool and runs idempotent schema migrations on startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! [`Database`] wraps a `SqlitePool`. Queries live in per-table submodules as
//! `impl Database` blocks; callers outside this module go through the traits in
//! [`repositories`].

mod activities;
mod predictions;

/// Repository traits and their `SQLite` implementations
pub mod repositories;

use crate::config::DatabaseUrl;
use crate::errors::DatabaseError;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Database manager for activity and prediction storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the file cannot be created, or
    /// a migration fails
    pub async fn new(database_url: &str) -> Result<Self, DatabaseError> {
        let url = DatabaseUrl::parse_url(database_url).map_err(|e| DatabaseError::ConnectionError {
            context: e.to_string(),
        })?;
        Self::connect(&url).await
    }

    /// Connect to a parsed [`DatabaseUrl`] and run migrations
    ///
    /// An in-memory database is held on a single connection that never expires,
    /// since every new `SQLite` memory connection would see an empty database.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn connect(url: &DatabaseUrl) -> Result<Self, DatabaseError> {
        let pool = match url {
            DatabaseUrl::Memory => {
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .min_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect(&url.to_connection_string())
                    .await?
            }
            DatabaseUrl::SQLite { path } => {
                ensure_parent_dir(path)?;
                // Ensure SQLite creates the database file if it doesn't exist
                let connection_options = format!("{}?mode=rwc", url.to_connection_string());
                SqlitePoolOptions::new().connect(&connection_options).await?
            }
        };

        let db = Self { pool };
        db.migrate().await?;
        info!(database = %url, "Database initialized");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any `CREATE` statement fails
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        self.migrate_activities().await?;
        self.migrate_predictions().await?;
        debug!("Database migrations complete");
        Ok(())
    }

    async fn migrate_activities(&self) -> Result<(), DatabaseError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS activities (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                date TEXT NOT NULL,
                steps INTEGER NOT NULL DEFAULT 0 CHECK (steps >= 0),
                distance_km REAL NOT NULL DEFAULT 0 CHECK (distance_km >= 0),
                active_minutes INTEGER NOT NULL DEFAULT 0 CHECK (active_minutes >= 0),
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                UNIQUE(user_id, date)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(migration_error)?;

        Ok(())
    }

    async fn migrate_predictions(&self) -> Result<(), DatabaseError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS predictions (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                prediction_date TEXT NOT NULL,
                prediction_type TEXT NOT NULL CHECK (
                    prediction_type IN ('goal_achievement', 'anomaly', 'trend', 'insight')
                ),
                description TEXT NOT NULL,
                prediction_data TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                UNIQUE(user_id, prediction_date, prediction_type)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(migration_error)?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_predictions_user_date ON predictions(user_id, prediction_date)",
        )
        .execute(&self.pool)
        .await
        .map_err(migration_error)?;

        Ok(())
    }
}

fn migration_error(e: sqlx::Error) -> DatabaseError {
    DatabaseError::MigrationError {
        context: e.to_string(),
    }
}

fn ensure_parent_dir(path: &Path) -> Result<(), DatabaseError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| DatabaseError::ConnectionError {
                context: format!("Failed to create {}: {e}", parent.display()),
            })
        }
        _ => Ok(()),
    }
}
