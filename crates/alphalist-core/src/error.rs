//! Error types for Alphalist.
//!
//! Sectioning, layout, and letter navigation are total and never fail. The
//! only fallible edges are the external scroll surface and loading list
//! configuration from disk.

use std::path::PathBuf;

/// Result type alias for Alphalist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Alphalist operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Scroll surface rejected a command.
    #[error("Scroll error: {0}")]
    Scroll(#[from] ScrollError),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors a scroll surface reports when it cannot honor a scroll command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScrollError {
    /// The surface is not mounted yet, or has been unmounted.
    #[error("Scroll surface is not attached")]
    Detached,

    /// The command targets a section the surface does not have.
    #[error("Section {section} is out of range (surface has {len} sections)")]
    SectionOutOfRange { section: usize, len: usize },

    /// The command targets a row past the end of its section.
    #[error("Row {row} is out of range for section {section} ({len} rows)")]
    RowOutOfRange { section: usize, row: usize, len: usize },
}

/// Errors that can occur while loading list configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML document could not be parsed.
    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The JSON document could not be parsed.
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension does not name a supported format.
    #[error("Unsupported configuration format for '{path}'")]
    UnsupportedFormat { path: PathBuf },

    /// A field holds a value the list cannot use.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a value error.
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}
