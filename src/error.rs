// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for prefkit
//!
//! Typed preference reads and writes never fail. These errors only surface
//! from backend housekeeping (opening and flushing a file store) and from the
//! CLI, where user input has to be validated.

use thiserror::Error;

/// Main error type for prefkit operations
#[derive(Error, Debug)]
pub enum PrefsError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No key with this name is registered
    #[error("Unknown preference key: {0}")]
    UnknownKey(String),

    /// A textual value could not be parsed for the key's kind
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    /// Attempted to write a key that is only kept for migration reads
    #[error("Preference key is deprecated and read-only: {0}")]
    DeprecatedKey(String),

    /// Configuration errors (store location, environment)
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for prefkit operations
pub type Result<T> = std::result::Result<T, PrefsError>;
