//! Langsniff error types.
//!
//! Detection itself never fails; these errors cover loading catalogs and
//! frequency tables, and the filesystem surface used by the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for langsniff operations.
#[derive(Error, Debug)]
pub enum SniffError {
    /// I/O error during file operations.
    #[error("I/O error for path {path}: {source}")]
    Io {
        /// The file path that caused the I/O error.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog contents are inconsistent.
    #[error("Invalid catalog: {message}")]
    InvalidCatalog {
        /// What is wrong with the catalog.
        message: String,
    },

    /// Frequency table counts do not add up.
    #[error("Invalid frequency table: {message}")]
    InvalidFrequencies {
        /// Which total is inconsistent.
        message: String,
    },

    /// A heuristic rule refers to a named pattern that does not exist.
    #[error("Unknown named pattern '{name}'")]
    UnknownNamedPattern {
        /// The missing pattern name.
        name: String,
    },

    /// Two disambiguation blocks claim the same extension.
    #[error("Extension '{extension}' has more than one disambiguation block")]
    DuplicateHeuristic {
        /// The repeated extension.
        extension: String,
    },

    /// Invalid glob pattern or failed glob iteration.
    #[error("Glob error for pattern '{pattern}': {message}")]
    Glob {
        /// The glob pattern.
        pattern: String,
        /// The glob error message.
        message: String,
    },

    /// Generic error with context.
    #[error("{0}")]
    Other(String),
}

impl SniffError {
    /// Wrap an I/O error with the path that produced it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SniffError::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable identifier of the error variant.
    pub fn kind(&self) -> &'static str {
        match self {
            SniffError::Io { .. } => "Io",
            SniffError::Json(_) => "Json",
            SniffError::InvalidCatalog { .. } => "InvalidCatalog",
            SniffError::InvalidFrequencies { .. } => "InvalidFrequencies",
            SniffError::UnknownNamedPattern { .. } => "UnknownNamedPattern",
            SniffError::DuplicateHeuristic { .. } => "DuplicateHeuristic",
            SniffError::Glob { .. } => "Glob",
            SniffError::Other(_) => "Other",
        }
    }

    /// File the error refers to, if any.
    pub fn file_path(&self) -> Option<&std::path::Path> {
        match self {
            SniffError::Io { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }

    /// Remediation hint for the user, if one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            SniffError::Io { .. } => Some("Check that the path exists and is readable"),
            SniffError::Json(_) => Some("The file must be valid JSON matching the expected schema"),
            SniffError::InvalidFrequencies { .. } => {
                Some("Regenerate the table with `langsniff frequencies` or fix the totals")
            }
            SniffError::UnknownNamedPattern { .. } => {
                Some("Declare the pattern under `named_patterns` in the catalog")
            }
            SniffError::DuplicateHeuristic { .. } => {
                Some("Merge the rules for this extension into a single disambiguation block")
            }
            SniffError::Glob { .. } => Some("Quote the pattern so the shell does not expand it"),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SniffError {
    fn from(err: std::io::Error) -> Self {
        SniffError::Io {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Result type alias for langsniff operations.
pub type Result<T> = std::result::Result<T, SniffError>;
