// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Error types for extraction and the CLI front end

use thiserror::Error;

/// Errors surfaced by pattern compilation, extraction and input handling.
///
/// Candidates that fail validation are not errors; they are reported as
/// rejected entries in the [`ScanReport`](crate::report::ScanReport).
#[derive(Debug, Error)]
pub enum SieveError {
    /// The input was rejected before any extraction began.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A recognizer pattern failed to compile.
    #[error("failed to compile pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The report could not be serialized to JSON.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// A file or stdin could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SieveError {
    /// Builds an [`SieveError::InvalidInput`] with the given reason.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        SieveError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        SieveError::Pattern {
            pattern: pattern.into(),
            source,
        }
    }
}
