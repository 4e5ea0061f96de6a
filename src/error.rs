//! Error types for prereq operations.
//!
//! This module defines [`PrereqError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Evaluating a requirement set never fails; only mode parsing and manifest
//!   loading produce errors
//! - Use `anyhow::Error` (via `PrereqError::Other`) for unexpected errors
//! - Messages name the offending file or value so users can fix the manifest

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for prereq operations.
#[derive(Debug, Error)]
pub enum PrereqError {
    /// A mode outside {all, any} was supplied.
    #[error("Invalid mode '{value}' given (expected 'all' or 'any')")]
    InvalidMode { value: String },

    /// Requirements manifest not found at expected location.
    #[error("Requirements manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse the requirements manifest.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParseError { path: PathBuf, message: String },

    /// Manifest parsed but contains unusable values.
    #[error("Invalid manifest: {message}")]
    ManifestValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for prereq operations.
pub type Result<T> = std::result::Result<T, PrereqError>;
