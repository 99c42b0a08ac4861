//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library. Note that transcript parsing itself is deliberately
//! infallible: malformed lines are skipped and unrecognized files yield zero
//! conversations (see [`crate::parse::parse_file`]). Errors here cover the
//! surrounding concerns only: file I/O and report serialization.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Conversation;
///
/// fn my_function() -> Result<Vec<Conversation>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing a report)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No transcript format could be recognized in the input.
    ///
    /// `parse_file` expresses this as an empty result; callers that require
    /// at least one conversation (such as the CLI) convert it into this
    /// error to report it to the user.
    #[error("Unrecognized transcript format{}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    UnrecognizedFormat {
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// CSV writing error.
    ///
    /// This can occur when writing report tables to CSV format.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    ///
    /// This can occur when writing the analytics summary as JSON.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when converting an in-memory report buffer to a string.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an unrecognized-format error for the given file.
    pub fn unrecognized_format(path: Option<PathBuf>) -> Self {
        ChatlensError::UnrecognizedFormat { path }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is an unrecognized-format error.
    pub fn is_unrecognized_format(&self) -> bool {
        matches!(self, ChatlensError::UnrecognizedFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
