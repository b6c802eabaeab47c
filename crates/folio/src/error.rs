//! Error types for folio.
//!
//! Only loading and output can fail. Everything that happens after a catalog
//! is in memory (rendering, filtering, toggling, the lightbox) degrades to
//! omitted UI elements instead of returning errors.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for folio operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Catalog Errors ===
    /// Failed to read the catalog file.
    #[error("failed to read catalog at {path}: {source}")]
    CatalogRead {
        /// Path to the catalog file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The catalog file could not be parsed.
    #[error("failed to parse catalog at {path}: {message}")]
    CatalogParse {
        /// Path to the catalog file.
        path: PathBuf,
        /// Description of what went wrong.
        message: String,
    },

    /// The catalog file extension is not one we know how to read.
    #[error("unsupported catalog format: {path} (expected .json or .toml)")]
    UnsupportedCatalogFormat {
        /// Path to the catalog file.
        path: PathBuf,
    },

    /// Two projects share the same id.
    #[error("duplicate project id '{id}'")]
    DuplicateProjectId {
        /// The repeated id.
        id: String,
    },

    /// The tag registry defines an id reserved for the "all" filter.
    #[error("catalog at {path} registers reserved tag id '{id}'")]
    ReservedTagId {
        /// Path to the catalog file.
        path: PathBuf,
        /// The reserved id.
        id: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Output Errors ===
    /// Failed to write rendered output.
    #[error("failed to write output to {path}: {source}")]
    OutputWrite {
        /// Destination path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for folio operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a catalog parse error for the given path.
    #[must_use]
    pub fn catalog_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::CatalogParse {
            path: path.into(),
            message: message.into(),
        }
    }
}
