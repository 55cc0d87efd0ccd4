//! Error types for the incguard library.
//!
//! This module provides the error hierarchy for locating headers, reading
//! and rewriting them, and loading configuration, using `thiserror` for
//! ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an incguard error.
///
/// # Examples
///
/// ```
/// use incguard::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("FRAMEWORK_FOO_HPP".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the incguard library.
#[derive(Debug, Error)]
pub enum Error {
    /// The root directory does not exist.
    #[error("root directory not found: {}", path.display())]
    RootNotFound {
        /// The missing root directory.
        path: PathBuf,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// Walking the header tree failed.
    #[error("failed to traverse {}: {source}", path.display())]
    Traversal {
        /// The path being visited when the walk failed.
        path: PathBuf,
        /// The underlying walk error.
        #[source]
        source: walkdir::Error,
    },

    /// A header could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The header that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A header could not be written back.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The header that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A run in keep-going mode finished with per-file failures.
    #[error("{count} header(s) could not be processed")]
    FilesFailed {
        /// Number of headers that failed.
        count: usize,
    },
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use incguard::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::RootNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::RootNotFound { .. } => true,
            Self::Read { source, .. } | Self::Write { source, .. } | Self::Io(source) => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }

    /// Check if error comes from touching the filesystem.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::RootNotFound { .. }
                | Self::Traversal { .. }
                | Self::Read { .. }
                | Self::Write { .. }
                | Self::Io(_)
                | Self::FilesFailed { .. }
        )
    }

    /// Check if error comes from configuration loading or validation.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Validation { .. })
    }
}
