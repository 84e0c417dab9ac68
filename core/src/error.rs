// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors produced by the T-Minus core.
#[derive(Debug, Error)]
pub enum Error {
    /// A mandatory form field was left blank.
    #[error("The {0} of an event is required")]
    EmptyField(&'static str),

    /// The date text does not follow `MM/DD/YYYY`.
    #[error("Invalid date '{0}', expected MM/DD/YYYY")]
    InvalidDate(String),

    /// The time text does not follow `HH:MM`.
    #[error("Invalid time '{0}', expected HH:MM (24-hour)")]
    InvalidTime(String),

    /// No event carries the given identifier.
    #[error("Event not found: #{0}")]
    NotFound(i64),

    /// A stored row could not be turned back into an event.
    #[error("Stored event #{0} is corrupted")]
    CorruptRecord(i64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for T-Minus operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
