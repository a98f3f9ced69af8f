//! Error types for lintree operations.
//!
//! This module defines [`LintreeError`], the error type used by the input
//! and host layers, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Formatting itself is infallible and never returns a `LintreeError`
//! - Reading and decoding result records is where things can go wrong

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lintree operations.
#[derive(Debug, Error)]
pub enum LintreeError {
    /// Result records could not be decoded from JSON.
    #[error("Failed to decode lint results from {source_name}: {message}")]
    Decode {
        source_name: String,
        message: String,
    },

    /// Result input file could not be read.
    #[error("Failed to read lint results at {path}: {message}")]
    InputUnreadable { path: PathBuf, message: String },

    /// The current working directory could not be determined.
    #[error("Cannot determine working directory: {message}")]
    WorkingDirectory { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for lintree operations.
pub type Result<T> = std::result::Result<T, LintreeError>;
