// ABOUTME: Database URL type for SQLite file and in-memory connections
// ABOUTME: Parses DATABASE_URL values and renders sqlx connection strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// Accepts `sqlite:<path>`, `sqlite::memory:`, and bare file paths.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty value or a non-SQLite scheme
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AppError::config("DATABASE_URL must not be empty"));
        }

        if let Some(path_str) = trimmed.strip_prefix("sqlite:") {
            return match path_str {
                ":memory:" => Ok(Self::Memory),
                "" => Err(AppError::config("DATABASE_URL is missing a SQLite path")),
                path => Ok(Self::SQLite {
                    path: PathBuf::from(path.trim_start_matches("//")),
                }),
            };
        }

        if trimmed.contains("://") {
            return Err(AppError::config(format!(
                "Unsupported database scheme in DATABASE_URL: {trimmed}"
            )));
        }

        // Bare path: treat as SQLite file
        Ok(Self::SQLite {
            path: PathBuf::from(trimmed),
        })
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(defaults::DATABASE_URL).unwrap_or(Self::Memory)
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}
