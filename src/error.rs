//! Error types for Sprout operations.
//!
//! This module defines [`SproutError`], the primary error type used throughout
//! the engine, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every I/O boundary (HTTP, archive, filesystem) returns a typed variant
//! - Use `anyhow::Error` (via `SproutError::Other`) for unexpected errors
//! - Nothing is retried; callers report the error and abort the operation

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Sprout operations.
#[derive(Debug, Error)]
pub enum SproutError {
    /// Host unreachable, transport failure, or request deadline exceeded.
    #[error("Network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} fetching {url}")]
    BadStatus { url: String, status: String },

    /// The downloaded archive could not be read or unpacked.
    #[error("Failed to extract archive: {message}")]
    ExtractionFailed { message: String },

    /// An archive entry would land outside the extraction root.
    #[error("Archive entry escapes extraction root: {entry}")]
    UnsafePath { entry: String },

    /// Extraction produced no usable top-level directory.
    #[error("No template collection found in archive from {url}")]
    EmptyCollection { url: String },

    /// The collection's catalog manifest is malformed.
    #[error("Failed to parse template catalog at {path}: {message}")]
    CatalogParseError { path: PathBuf, message: String },

    /// No template with this name in the effective catalog.
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// A filesystem failure while materializing a template.
    #[error("Failed to copy {path}: {source}")]
    CopyError {
        /// Path relative to the template root.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file not found at an explicitly given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Project directory already exists.
    #[error("Directory already exists: {path}")]
    DestinationExists { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SproutError {
    /// Short, stable label for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network { .. } => "network",
            Self::BadStatus { .. } => "bad-status",
            Self::ExtractionFailed { .. } => "extraction-failed",
            Self::UnsafePath { .. } => "unsafe-path",
            Self::EmptyCollection { .. } => "empty-collection",
            Self::CatalogParseError { .. } => "catalog-parse",
            Self::TemplateNotFound { .. } => "template-not-found",
            Self::CopyError { .. } => "copy",
            Self::ConfigNotFound { .. } => "config-not-found",
            Self::ConfigParseError { .. } => "config-parse",
            Self::DestinationExists { .. } => "destination-exists",
            Self::Io(_) => "io",
            Self::Other(_) => "other",
        }
    }
}

/// Result type alias for Sprout operations.
pub type Result<T> = std::result::Result<T, SproutError>;
