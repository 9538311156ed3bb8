// ABOUTME: Structured error types for database operations
// ABOUTME: Provides domain-specific errors with context for activity and prediction storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised by the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Could not open or reach the database
    #[error("Database connection failed: {context}")]
    ConnectionError {
        /// What was being attempted
        context: String,
    },

    /// A query failed to execute
    #[error("Database query failed: {context}")]
    QueryError {
        /// What was being attempted
        context: String,
    },

    /// Schema creation failed
    #[error("Database migration failed: {context}")]
    MigrationError {
        /// Migration step that failed
        context: String,
    },

    /// Stored JSON could not be encoded or decoded
    #[error("Failed to (de)serialize {entity}: {reason}")]
    SerializationError {
        /// Entity being (de)serialized
        entity: &'static str,
        /// Underlying failure
        reason: String,
    },

    /// Record failed validation before being written, or a stored column is malformed
    #[error("Invalid value for {field}: {reason}")]
    InvalidData {
        /// Offending field
        field: String,
        /// Why it was rejected
        reason: String,
    },
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::ConnectionError {
                    context: error.to_string(),
                }
            }
            other => Self::QueryError {
                context: other.to_string(),
            },
        }
    }
}
