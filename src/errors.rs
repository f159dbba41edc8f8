/*!
 * Error types for the subcorpus application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur during sentence extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A cleaned line matched the ignore pattern, rejecting the whole document
    #[error("Document rejected, line matched ignore pattern: {line:?}")]
    DocumentRejected {
        /// The line that triggered the rejection
        line: String,
    },

    /// Error when parsing the subtitle source fails
    #[error("Failed to parse subtitle source: {0}")]
    Parse(String),

    /// Error reading the subtitle source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when sampling sentences from a pool
#[derive(Error, Debug)]
pub enum SampleError {
    /// Error when the pool contains no sentences at all
    #[error("Cannot sample from an empty pool")]
    EmptyPool,

    /// Error when the requested window is inverted
    #[error("Minimum length {min} must be below maximum length {max}")]
    InvalidRange {
        /// Normalized lower bound
        min: usize,
        /// Normalized upper bound
        max: usize,
    },

    /// Error when the window cannot admit any sentence the extractor produces
    #[error("Maximum length {max} is below the shortest admissible sentence length")]
    RangeTooSmall {
        /// Normalized upper bound
        max: usize,
    },

    /// Error when the pool is non-empty but no sentence fits the window
    #[error("No sentence has a length inside ({min}, {max})")]
    NoCandidates {
        /// Normalized lower bound
        min: usize,
        /// Normalized upper bound
        max: usize,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from sentence extraction
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Error from sentence sampling
    #[error("Sampling error: {0}")]
    Sample(#[from] SampleError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
